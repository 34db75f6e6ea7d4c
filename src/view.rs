use crate::{
    form::SubmitPhase,
    scroll::{NavbarChrome, SectionTop},
    theme::Theme,
};

/// Everything the behaviors read from or write to the rendered page.
///
/// Reads are taken at the moment a handler runs; nothing here is cached between events.
pub trait PageView: 'static {
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_offset(&self) -> f64;
    /// Top edges of reveal-eligible elements relative to the viewport, in document order.
    fn reveal_tops(&self) -> Vec<f64>;
    fn section_tops(&self) -> Vec<SectionTop>;
    fn orb_count(&self) -> usize;
    /// Hands over the subtitle's original text and blanks it, if the subtitle exists.
    fn take_subtitle_text(&self) -> Option<String>;

    fn apply_theme(&self, theme: Theme);
    fn reveal_element(&self, index: usize);
    fn set_section_active(&self, section_id: Option<&str>);
    fn set_menu_open(&self, open: bool);
    fn set_navbar_chrome(&self, chrome: &NavbarChrome);
    fn set_orb_transform(&self, index: usize, transform: &str);
    fn set_card_transform(&self, card: usize, transform: &str);
    fn set_skill_card_transform(&self, card: usize, transform: &str);
    fn set_submit_phase(&self, phase: SubmitPhase);
    fn reset_form_fields(&self);
    fn set_typed_text(&self, text: &str);
    fn hide_loader(&self);
    fn set_viewport_zoom_locked(&self, locked: bool);
    fn set_download_pressed(&self, pressed: bool);
    fn scroll_to(&self, top: f64);
}

#[cfg(test)]
pub use recording::{RecordingView, ViewEvent};

#[cfg(test)]
mod recording {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    pub enum ViewEvent {
        Theme(Theme),
        Reveal(usize),
        ActiveSection(Option<String>),
        MenuOpen(bool),
        Navbar(NavbarChrome),
        Orb(usize, String),
        Card(usize, String),
        SkillCard(usize, String),
        Submit(SubmitPhase),
        FormReset,
        Typed(String),
        LoaderHidden,
        ZoomLocked(bool),
        DownloadPressed(bool),
        ScrollTo(f64),
    }

    pub struct RecordingView {
        viewport: Cell<(f64, f64)>,
        scroll_offset: Cell<f64>,
        reveal_tops: RefCell<Vec<f64>>,
        sections: RefCell<Vec<SectionTop>>,
        orb_count: Cell<usize>,
        subtitle: RefCell<Option<String>>,
        menu_open: Cell<bool>,
        events: RefCell<Vec<ViewEvent>>,
    }

    impl Default for RecordingView {
        fn default() -> Self {
            Self {
                viewport: Cell::new((1280.0, 720.0)),
                scroll_offset: Cell::new(0.0),
                reveal_tops: RefCell::new(Vec::new()),
                sections: RefCell::new(Vec::new()),
                orb_count: Cell::new(0),
                subtitle: RefCell::new(None),
                menu_open: Cell::new(false),
                events: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecordingView {
        pub fn set_viewport(&self, width: f64, height: f64) {
            self.viewport.set((width, height));
        }

        pub fn set_scroll_offset(&self, offset: f64) {
            self.scroll_offset.set(offset);
        }

        pub fn set_reveal_tops(&self, tops: Vec<f64>) {
            *self.reveal_tops.borrow_mut() = tops;
        }

        pub fn set_sections(&self, sections: Vec<SectionTop>) {
            *self.sections.borrow_mut() = sections;
        }

        pub fn set_orb_count(&self, count: usize) {
            self.orb_count.set(count);
        }

        pub fn set_subtitle(&self, text: &str) {
            *self.subtitle.borrow_mut() = Some(text.to_string());
        }

        pub fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }

        pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
            self.events.borrow().iter().filter(|event| predicate(*event)).count()
        }

        pub fn scroll_locked(&self) -> bool {
            self.menu_open.get()
        }

        pub fn last_theme(&self) -> Option<Theme> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Theme(theme) => Some(*theme),
                _ => None,
            })
        }

        pub fn last_navbar(&self) -> Option<NavbarChrome> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Navbar(chrome) => Some(*chrome),
                _ => None,
            })
        }

        pub fn active_section(&self) -> Option<String> {
            self.events
                .borrow()
                .iter()
                .rev()
                .find_map(|event| match event {
                    ViewEvent::ActiveSection(section) => Some(section.clone()),
                    _ => None,
                })
                .flatten()
        }

        pub fn last_card_transform(&self, card: usize) -> Option<String> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Card(index, transform) if *index == card => Some(transform.clone()),
                _ => None,
            })
        }

        pub fn submit_phase(&self) -> SubmitPhase {
            self.events
                .borrow()
                .iter()
                .rev()
                .find_map(|event| match event {
                    ViewEvent::Submit(phase) => Some(*phase),
                    _ => None,
                })
                .unwrap_or_default()
        }

        pub fn form_was_reset(&self) -> bool {
            self.count(|event| matches!(event, ViewEvent::FormReset)) > 0
        }

        pub fn typed_text(&self) -> Option<String> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Typed(text) => Some(text.clone()),
                _ => None,
            })
        }

        pub fn zoom_locked(&self) -> Option<bool> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::ZoomLocked(locked) => Some(*locked),
                _ => None,
            })
        }

        fn record(&self, event: ViewEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    impl PageView for RecordingView {
        fn viewport_width(&self) -> f64 {
            self.viewport.get().0
        }

        fn viewport_height(&self) -> f64 {
            self.viewport.get().1
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll_offset.get()
        }

        fn reveal_tops(&self) -> Vec<f64> {
            self.reveal_tops.borrow().clone()
        }

        fn section_tops(&self) -> Vec<SectionTop> {
            self.sections.borrow().clone()
        }

        fn orb_count(&self) -> usize {
            self.orb_count.get()
        }

        fn take_subtitle_text(&self) -> Option<String> {
            let text = self.subtitle.borrow_mut().take()?;
            *self.subtitle.borrow_mut() = Some(String::new());
            Some(text)
        }

        fn apply_theme(&self, theme: Theme) {
            self.record(ViewEvent::Theme(theme));
        }

        fn reveal_element(&self, index: usize) {
            self.record(ViewEvent::Reveal(index));
        }

        fn set_section_active(&self, section_id: Option<&str>) {
            self.record(ViewEvent::ActiveSection(section_id.map(ToString::to_string)));
        }

        fn set_menu_open(&self, open: bool) {
            self.menu_open.set(open);
            self.record(ViewEvent::MenuOpen(open));
        }

        fn set_navbar_chrome(&self, chrome: &NavbarChrome) {
            self.record(ViewEvent::Navbar(*chrome));
        }

        fn set_orb_transform(&self, index: usize, transform: &str) {
            self.record(ViewEvent::Orb(index, transform.to_string()));
        }

        fn set_card_transform(&self, card: usize, transform: &str) {
            self.record(ViewEvent::Card(card, transform.to_string()));
        }

        fn set_skill_card_transform(&self, card: usize, transform: &str) {
            self.record(ViewEvent::SkillCard(card, transform.to_string()));
        }

        fn set_submit_phase(&self, phase: SubmitPhase) {
            self.record(ViewEvent::Submit(phase));
        }

        fn reset_form_fields(&self) {
            self.record(ViewEvent::FormReset);
        }

        fn set_typed_text(&self, text: &str) {
            self.record(ViewEvent::Typed(text.to_string()));
        }

        fn hide_loader(&self) {
            self.record(ViewEvent::LoaderHidden);
        }

        fn set_viewport_zoom_locked(&self, locked: bool) {
            self.record(ViewEvent::ZoomLocked(locked));
        }

        fn set_download_pressed(&self, pressed: bool) {
            self.record(ViewEvent::DownloadPressed(pressed));
        }

        fn scroll_to(&self, top: f64) {
            self.record(ViewEvent::ScrollTo(top));
        }
    }
}
