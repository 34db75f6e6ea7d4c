use crate::{
    config::BehaviorConfig,
    controller::UiBehaviorController,
    form::SubmitPhase,
    logging::{log_event, LogLevel},
    menu::ClickTarget,
    pointer::CardRect,
    scheduler::Scheduler,
    scroll::{nav_link_matches, NavbarChrome, SectionTop},
    theme::{PreferenceStore, Theme, LIGHT_THEME_CLASS},
    view::PageView,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use js_sys::{Array, Reflect};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Node,
    ScrollBehavior, ScrollToOptions, Storage,
};

const CONFIG_SCRIPT: &str = "#ui-behavior-config";
const THEME_TOGGLE: &str = ".theme-toggle";
const THEME_ICON: &str = ".theme-toggle i";
const NAVBAR: &str = "nav";
const MENU_TOGGLE: &str = ".menu-toggle";
const NAV_MENU: &str = ".nav-menu";
const NAV_LINKS: &str = ".nav-link";
const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
const SECTIONS: &str = "section";
const REVEALS: &str = ".reveal";
const CONTACT_FORM: &str = ".contact-form";
const SUBMIT_BUTTON: &str = ".contact-form .submit-btn";
const FLOATING_ORBS: &str = ".floating-orb";
const SKILL_CARDS: &str = ".skill-card";
const PROJECT_CARDS: &str = ".project-card";
const LOADER: &str = ".loader";
const SUBTITLE: &str = ".hero-subtitle";
const DOWNLOAD_BUTTON: &str = ".download-btn";
const VIEWPORT_META: &str = "meta[name=\"viewport\"]";
const TEXT_INPUTS: &str = "input, textarea";

const ACTIVE_CLASS: &str = "active";
const LOADER_HIDDEN_CLASS: &str = "hide";
const VIEWPORT_DEFAULT: &str = "width=device-width, initial-scale=1.0";
const VIEWPORT_LOCKED: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=0";
const DOWNLOAD_PRESSED_TRANSFORM: &str = "scale(0.95)";
const SECTION_FADE_THRESHOLD: f64 = 0.1;
const SECTION_FADE_ROOT_MARGIN: &str = "0px 0px -100px 0px";

type DomController = UiBehaviorController<DomView, TimerScheduler, LocalStore>;

#[derive(Clone, Copy, Default)]
struct TimerScheduler;

impl Scheduler for TimerScheduler {
    type Timer = Timeout;

    fn after<F>(&self, delay_ms: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, task)
    }

    fn detach(&self, timer: Timeout) {
        let _ = timer.forget();
    }
}

struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_as<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    query(document, selector).and_then(|element| element.dyn_into::<T>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

fn contains_target(container: Option<&Element>, target: Option<&Node>) -> bool {
    container.is_some_and(|container| container.contains(target))
}

struct DomView {
    body: Option<HtmlElement>,
    theme_icon: Option<Element>,
    navbar: Option<Element>,
    menu_toggle: Option<Element>,
    nav_menu: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<HtmlElement>,
    reveals: Vec<Element>,
    contact_form: Option<HtmlFormElement>,
    submit_button: Option<HtmlButtonElement>,
    idle_submit_html: RefCell<Option<String>>,
    orbs: Vec<Element>,
    project_cards: Vec<Element>,
    skill_cards: Vec<Element>,
    loader: Option<Element>,
    subtitle: Option<Element>,
    viewport_meta: Option<Element>,
    download_button: Option<Element>,
}

impl DomView {
    fn collect(document: &Document) -> Self {
        Self {
            body: document.body(),
            theme_icon: query(document, THEME_ICON),
            navbar: query(document, NAVBAR),
            menu_toggle: query(document, MENU_TOGGLE),
            nav_menu: query(document, NAV_MENU),
            nav_links: query_all(document, NAV_LINKS),
            sections: query_all(document, SECTIONS)
                .into_iter()
                .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
                .collect(),
            reveals: query_all(document, REVEALS),
            contact_form: query_as(document, CONTACT_FORM),
            submit_button: query_as(document, SUBMIT_BUTTON),
            idle_submit_html: RefCell::new(None),
            orbs: query_all(document, FLOATING_ORBS),
            project_cards: query_all(document, PROJECT_CARDS),
            skill_cards: query_all(document, SKILL_CARDS),
            loader: query(document, LOADER),
            subtitle: query(document, SUBTITLE),
            viewport_meta: query(document, VIEWPORT_META),
            download_button: query(document, DOWNLOAD_BUTTON),
        }
    }

    fn click_target(&self, event: &Event) -> ClickTarget {
        let target = event.target();
        let target = target.as_ref().and_then(|target| target.dyn_ref::<Node>());

        if contains_target(self.menu_toggle.as_ref(), target) {
            ClickTarget::MenuButton
        } else if contains_target(self.nav_menu.as_ref(), target) {
            ClickTarget::MenuPanel
        } else {
            ClickTarget::Outside
        }
    }
}

impl PageView for DomView {
    fn viewport_width(&self) -> f64 {
        viewport_size().0
    }

    fn viewport_height(&self) -> f64 {
        viewport_size().1
    }

    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn reveal_tops(&self) -> Vec<f64> {
        self.reveals
            .iter()
            .map(|element| element.get_bounding_client_rect().top())
            .collect()
    }

    fn section_tops(&self) -> Vec<SectionTop> {
        self.sections
            .iter()
            .map(|section| SectionTop {
                id: section.id(),
                top: f64::from(section.offset_top()),
            })
            .collect()
    }

    fn orb_count(&self) -> usize {
        self.orbs.len()
    }

    fn take_subtitle_text(&self) -> Option<String> {
        let subtitle = self.subtitle.as_ref()?;
        let text = subtitle.text_content().unwrap_or_default();
        subtitle.set_text_content(Some(""));
        Some(text)
    }

    fn apply_theme(&self, theme: Theme) {
        if let Some(body) = self.body.as_ref() {
            set_class(body, LIGHT_THEME_CLASS, theme == Theme::Light);
        }

        if let Some(icon) = self.theme_icon.as_ref() {
            set_class(icon, theme.toggled().icon_class(), false);
            set_class(icon, theme.icon_class(), true);
        }
    }

    fn reveal_element(&self, index: usize) {
        if let Some(element) = self.reveals.get(index) {
            set_class(element, ACTIVE_CLASS, true);
        }
    }

    fn set_section_active(&self, section_id: Option<&str>) {
        for link in &self.nav_links {
            let href = link.get_attribute("href").unwrap_or_default();
            let active = section_id.is_some_and(|id| nav_link_matches(&href, id));
            set_class(link, ACTIVE_CLASS, active);
        }
    }

    fn set_menu_open(&self, open: bool) {
        for element in [self.menu_toggle.as_ref(), self.nav_menu.as_ref()]
            .into_iter()
            .flatten()
        {
            set_class(element, ACTIVE_CLASS, open);
        }

        if let Some(body) = self.body.as_ref() {
            let _ = body
                .style()
                .set_property("overflow", if open { "hidden" } else { "" });
        }
    }

    fn set_navbar_chrome(&self, chrome: &NavbarChrome) {
        let Some(navbar) = self.navbar.as_ref() else {
            return;
        };

        set_style(navbar, "background", chrome.background);
        set_style(navbar, "box-shadow", chrome.box_shadow);
        set_style(navbar, "transform", chrome.transform());
    }

    fn set_orb_transform(&self, index: usize, transform: &str) {
        if let Some(orb) = self.orbs.get(index) {
            set_style(orb, "transform", transform);
        }
    }

    fn set_card_transform(&self, card: usize, transform: &str) {
        if let Some(card) = self.project_cards.get(card) {
            set_style(card, "transform", transform);
        }
    }

    fn set_skill_card_transform(&self, card: usize, transform: &str) {
        if let Some(card) = self.skill_cards.get(card) {
            set_style(card, "transform", transform);
        }
    }

    fn set_submit_phase(&self, phase: SubmitPhase) {
        let Some(button) = self.submit_button.as_ref() else {
            return;
        };

        match phase.label_html() {
            Some(label) => {
                let mut idle_html = self.idle_submit_html.borrow_mut();
                if idle_html.is_none() {
                    *idle_html = Some(button.inner_html());
                }
                button.set_inner_html(label);
            }
            None => {
                if let Some(html) = self.idle_submit_html.borrow_mut().take() {
                    button.set_inner_html(&html);
                }
            }
        }

        let _ = button
            .style()
            .set_property("background", phase.background().unwrap_or(""));
        button.set_disabled(phase.disabled());
    }

    fn reset_form_fields(&self) {
        if let Some(form) = self.contact_form.as_ref() {
            form.reset();
        }
    }

    fn set_typed_text(&self, text: &str) {
        if let Some(subtitle) = self.subtitle.as_ref() {
            subtitle.set_text_content(Some(text));
        }
    }

    fn hide_loader(&self) {
        if let Some(loader) = self.loader.as_ref() {
            set_class(loader, LOADER_HIDDEN_CLASS, true);
        }
    }

    fn set_viewport_zoom_locked(&self, locked: bool) {
        if let Some(meta) = self.viewport_meta.as_ref() {
            let content = if locked { VIEWPORT_LOCKED } else { VIEWPORT_DEFAULT };
            let _ = meta.set_attribute("content", content);
        }
    }

    fn set_download_pressed(&self, pressed: bool) {
        if let Some(button) = self.download_button.as_ref() {
            let transform = if pressed { DOWNLOAD_PRESSED_TRANSFORM } else { "" };
            set_style(button, "transform", transform);
        }
    }

    fn scroll_to(&self, top: f64) {
        let Some(win) = window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn document_loaded(document: &Document) -> bool {
    let document: &JsValue = document.as_ref();
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

fn read_config(document: &Document) -> BehaviorConfig {
    let raw = query(document, CONFIG_SCRIPT).and_then(|script| script.text_content());
    let (config, error) = BehaviorConfig::from_page_json(raw.as_deref());

    if let Some(error) = error {
        log_event(
            config.log_level,
            LogLevel::Info,
            "config_invalid",
            json!({ "error": error.to_string() }),
        );
    }

    config
}

fn listen(target: &impl AsRef<web_sys::EventTarget>, event: &'static str, handler: impl FnMut(&Event) + 'static) {
    EventListener::new(target.as_ref(), event, handler).forget();
}

fn listen_cancelable(
    target: &impl AsRef<web_sys::EventTarget>,
    event: &'static str,
    handler: impl FnMut(&Event) + 'static,
) {
    EventListener::new_with_options(
        target.as_ref(),
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
    .forget();
}

fn bind_navigation(document: &Document, view: &Rc<DomView>, controller: &Rc<DomController>) {
    if let Some(toggle) = query(document, THEME_TOGGLE) {
        let controller = Rc::clone(controller);
        listen(&toggle, "click", move |_| {
            controller.toggle_theme();
        });
    }

    if let Some(menu_toggle) = view.menu_toggle.as_ref() {
        let controller = Rc::clone(controller);
        listen(menu_toggle, "click", move |_| controller.toggle_menu());
    }

    for link in &view.nav_links {
        let controller = Rc::clone(controller);
        listen(link, "click", move |_| controller.on_nav_link_click());
    }

    {
        let view = Rc::clone(view);
        let controller = Rc::clone(controller);
        listen(document, "click", move |event| {
            controller.on_document_click(view.click_target(event));
        });
    }

    for anchor in query_all(document, IN_PAGE_ANCHORS) {
        let document = document.clone();
        let controller = Rc::clone(controller);
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen_cancelable(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(target) = query(&document, &href) {
                controller.scroll_to_anchor(target.get_bounding_client_rect().top());
            }
        });
    }
}

fn bind_window(win: &web_sys::Window, controller: &Rc<DomController>) {
    {
        let controller = Rc::clone(controller);
        listen(win, "load", move |_| controller.on_page_load());
    }
    {
        let controller = Rc::clone(controller);
        listen(win, "scroll", move |_| controller.on_scroll());
    }
    {
        let controller = Rc::clone(controller);
        listen(win, "resize", move |_| controller.on_resize());
    }
}

fn bind_form(document: &Document, view: &Rc<DomView>, controller: &Rc<DomController>) {
    if let Some(form) = view.contact_form.as_ref() {
        let controller = Rc::clone(controller);
        listen_cancelable(form, "submit", move |event| {
            event.prevent_default();
            controller.submit_form();
        });
    }

    for input in query_all(document, TEXT_INPUTS) {
        {
            let controller = Rc::clone(controller);
            listen(&input, "focus", move |_| controller.on_input_focus());
        }
        let controller = Rc::clone(controller);
        listen(&input, "blur", move |_| controller.on_input_blur());
    }

    if let Some(button) = view.download_button.as_ref() {
        let controller = Rc::clone(controller);
        listen(button, "click", move |_| controller.on_download_click());
    }
}

fn bind_pointer(document: &Document, view: &Rc<DomView>, controller: &Rc<DomController>) {
    for (index, card) in view.skill_cards.iter().enumerate() {
        {
            let controller = Rc::clone(controller);
            listen(card, "mouseenter", move |_| controller.on_skill_card_hover(index, true));
        }
        let controller = Rc::clone(controller);
        listen(card, "mouseleave", move |_| controller.on_skill_card_hover(index, false));
    }

    if !controller.pointer_effects_enabled() {
        return;
    }

    {
        let controller = Rc::clone(controller);
        listen(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            controller.on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
        });
    }

    for (index, card) in view.project_cards.iter().enumerate() {
        {
            let controller = Rc::clone(controller);
            let card_for_rect = card.clone();
            listen(card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = card_for_rect.get_bounding_client_rect();
                controller.on_card_pointer_move(
                    index,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    CardRect {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    },
                );
            });
        }
        let controller = Rc::clone(controller);
        listen(card, "mouseleave", move |_| controller.on_card_pointer_leave(index));
    }
}

fn observe_section_fade_in(sections: &[HtmlElement]) {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    set_style(&target, "opacity", "1");
                    set_style(&target, "transform", "translateY(0)");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_FADE_THRESHOLD));
    options.set_root_margin(SECTION_FADE_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for section in sections {
        observer.observe(section);
    }
    callback.forget();
}

pub fn run() {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    let config = read_config(&document);
    let view = Rc::new(DomView::collect(&document));
    let controller = Rc::new(UiBehaviorController::new(
        Rc::clone(&view),
        TimerScheduler,
        LocalStore,
        config,
    ));

    bind_window(&win, &controller);
    bind_navigation(&document, &view, &controller);
    bind_form(&document, &view, &controller);
    bind_pointer(&document, &view, &controller);
    observe_section_fade_in(&view.sections);

    controller.init();

    // The load event may already be gone by the time the module starts.
    if document_loaded(&document) {
        controller.on_page_load();
    }
}
