use crate::{
    config::BehaviorConfig,
    form::{FormSimulator, SubmitPhase},
    logging::{log_event, print_banner, LogLevel},
    menu::{ClickTarget, NavigationMenu},
    pointer::{CardRect, PointerEffects},
    scheduler::Scheduler,
    scroll::{anchor_scroll_top, ScrollEffects},
    theme::{PreferenceStore, Theme, ThemePreference},
    typing::TypingEffect,
    view::PageView,
};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};

/// Page-wide behavior state, one entry point per DOM event.
pub struct UiBehaviorController<V, S, P>
where
    V: PageView,
    S: Scheduler,
    P: PreferenceStore,
{
    view: Rc<V>,
    scheduler: S,
    config: BehaviorConfig,
    theme: ThemePreference<P>,
    menu: NavigationMenu,
    scroll: Rc<ScrollEffects>,
    pointer: PointerEffects,
    form: FormSimulator,
    typing: TypingEffect,
    resize_timer: RefCell<Option<S::Timer>>,
}

impl<V, S, P> UiBehaviorController<V, S, P>
where
    V: PageView,
    S: Scheduler,
    P: PreferenceStore,
{
    pub fn new(view: Rc<V>, scheduler: S, store: P, config: BehaviorConfig) -> Self {
        let pointer = PointerEffects::new(view.viewport_width(), &config);

        Self {
            view,
            scheduler,
            config,
            theme: ThemePreference::new(store),
            menu: NavigationMenu::default(),
            scroll: Rc::new(ScrollEffects::default()),
            pointer,
            form: FormSimulator::default(),
            typing: TypingEffect::default(),
            resize_timer: RefCell::new(None),
        }
    }

    pub fn init(&self) {
        let theme = self.theme.load();
        self.theme.apply(&*self.view, theme);
        self.scroll.reveal_pass(&*self.view, &self.config);

        let typing = match self.view.take_subtitle_text() {
            Some(text) => self.typing.start(&self.view, &self.scheduler, &text, &self.config),
            None => false,
        };

        print_banner();
        log_event(
            self.config.log_level,
            LogLevel::Info,
            "ui_initialized",
            json!({
                "theme": theme.as_str(),
                "pointerEffects": self.pointer.enabled(),
                "typing": typing,
            }),
        );
    }

    pub fn on_page_load(&self) {
        let view = Rc::clone(&self.view);
        self.scheduler
            .after_detached(self.config.loader_delay_ms, move || view.hide_loader());
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme.toggle(&*self.view);
        log_event(
            self.config.log_level,
            LogLevel::Debug,
            "theme_toggled",
            json!({ "theme": theme.as_str() }),
        );
        theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&self) {
        let open = self.menu.toggle(&*self.view);
        log_event(
            self.config.log_level,
            LogLevel::Debug,
            "menu_toggled",
            json!({ "open": open }),
        );
    }

    pub fn on_nav_link_click(&self) {
        self.menu.close(&*self.view);
    }

    pub fn on_document_click(&self, target: ClickTarget) {
        self.menu.on_document_click(&*self.view, target);
    }

    pub fn scroll_to_anchor(&self, target_rect_top: f64) {
        let top = anchor_scroll_top(
            target_rect_top,
            self.view.scroll_offset(),
            self.config.anchor_header_offset_px,
        );
        self.view.scroll_to(top);
    }

    pub fn on_scroll(&self) {
        self.scroll
            .on_scroll(&*self.view, self.theme.current(), &self.config);
    }

    pub fn on_resize(&self) {
        self.menu.on_resize(
            &*self.view,
            self.view.viewport_width(),
            self.config.desktop_min_width_px,
        );

        let scroll = Rc::clone(&self.scroll);
        let view = Rc::clone(&self.view);
        let config = self.config;
        let timer = self
            .scheduler
            .after(self.config.resize_debounce_ms, move || scroll.reveal_pass(&*view, &config));

        // Replacing the pending timer drops, and so cancels, the previous one.
        let previous = self.resize_timer.replace(Some(timer));
        drop(previous);
    }

    pub fn pointer_effects_enabled(&self) -> bool {
        self.pointer.enabled()
    }

    pub fn on_pointer_move(&self, client_x: f64, client_y: f64) {
        self.pointer
            .on_pointer_move(&*self.view, client_x, client_y, &self.config);
    }

    pub fn on_card_pointer_move(&self, card: usize, client_x: f64, client_y: f64, rect: CardRect) {
        self.pointer
            .on_card_move(&*self.view, card, client_x, client_y, rect, &self.config);
    }

    pub fn on_card_pointer_leave(&self, card: usize) {
        self.pointer.on_card_leave(&*self.view, card);
    }

    pub fn on_skill_card_hover(&self, card: usize, hovered: bool) {
        self.pointer.on_skill_card_hover(&*self.view, card, hovered);
    }

    pub fn submit_phase(&self) -> SubmitPhase {
        self.form.phase()
    }

    pub fn submit_form(&self) {
        if self.form.submit(&self.view, &self.scheduler, &self.config) {
            log_event(self.config.log_level, LogLevel::Info, "form_submitted", json!({}));
        }
    }

    pub fn on_download_click(&self) {
        self.view.set_download_pressed(true);

        let view = Rc::clone(&self.view);
        self.scheduler.after_detached(self.config.download_press_ms, move || {
            view.set_download_pressed(false);
        });

        log_event(
            self.config.log_level,
            LogLevel::Info,
            "cv_download_initiated",
            json!({}),
        );
    }

    pub fn on_input_focus(&self) {
        if self.view.viewport_width() < self.config.desktop_min_width_px {
            self.view.set_viewport_zoom_locked(true);
        }
    }

    pub fn on_input_blur(&self) {
        self.view.set_viewport_zoom_locked(false);
    }
}
