use crate::{config::BehaviorConfig, theme::Theme, view::PageView};
use std::cell::{Cell, RefCell};

const LIGHT_NAVBAR_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
const DARK_NAVBAR_ELEVATED_BACKGROUND: &str = "rgba(10, 10, 10, 0.95)";
const DARK_NAVBAR_RESTING_BACKGROUND: &str = "rgba(10, 10, 10, 0.8)";
const NAVBAR_ELEVATED_SHADOW: &str = "0 5px 20px rgba(0, 0, 0, 0.1)";
const NAVBAR_RESTING_SHADOW: &str = "none";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTop {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarChrome {
    pub background: &'static str,
    pub box_shadow: &'static str,
    pub hidden: bool,
}

impl NavbarChrome {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

pub fn should_reveal(element_top: f64, viewport_height: f64, reveal_offset: f64) -> bool {
    element_top < viewport_height - reveal_offset
}

/// Last section in document order whose top is within `section_offset` of the scroll offset.
pub fn active_section(sections: &[SectionTop], scroll_offset: f64, section_offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_offset >= section.top - section_offset)
        .last()
        .map(|section| section.id.as_str())
        .filter(|id| !id.is_empty())
}

pub fn nav_link_matches(href: &str, section_id: &str) -> bool {
    href.get(1..) == Some(section_id)
}

pub fn navbar_chrome(
    theme: Theme,
    scroll_offset: f64,
    last_offset: f64,
    config: &BehaviorConfig,
) -> NavbarChrome {
    let elevated = scroll_offset > config.navbar_elevate_px;
    let background = match (theme, elevated) {
        (Theme::Light, _) => LIGHT_NAVBAR_BACKGROUND,
        (Theme::Dark, true) => DARK_NAVBAR_ELEVATED_BACKGROUND,
        (Theme::Dark, false) => DARK_NAVBAR_RESTING_BACKGROUND,
    };
    let box_shadow = if elevated {
        NAVBAR_ELEVATED_SHADOW
    } else {
        NAVBAR_RESTING_SHADOW
    };

    NavbarChrome {
        background,
        box_shadow,
        hidden: scroll_offset > last_offset && scroll_offset > config.navbar_hide_px,
    }
}

pub fn anchor_scroll_top(target_rect_top: f64, scroll_offset: f64, header_offset: f64) -> f64 {
    target_rect_top + scroll_offset - header_offset
}

#[derive(Default)]
pub struct ScrollEffects {
    last_offset: Cell<f64>,
    revealed: RefCell<Vec<bool>>,
}

impl ScrollEffects {
    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.borrow().get(index).copied().unwrap_or(false)
    }

    pub fn reveal_pass(&self, view: &impl PageView, config: &BehaviorConfig) {
        let viewport_height = view.viewport_height();
        let tops = view.reveal_tops();
        let mut revealed = self.revealed.borrow_mut();
        if revealed.len() < tops.len() {
            revealed.resize(tops.len(), false);
        }

        for (index, top) in tops.into_iter().enumerate() {
            if revealed[index] || !should_reveal(top, viewport_height, config.reveal_offset_px) {
                continue;
            }

            revealed[index] = true;
            view.reveal_element(index);
        }
    }

    pub fn on_scroll(&self, view: &impl PageView, theme: Theme, config: &BehaviorConfig) {
        self.reveal_pass(view, config);

        let scroll_offset = view.scroll_offset();
        let sections = view.section_tops();
        view.set_section_active(active_section(&sections, scroll_offset, config.section_offset_px));

        let chrome = navbar_chrome(theme, scroll_offset, self.last_offset.get(), config);
        view.set_navbar_chrome(&chrome);
        self.last_offset.set(scroll_offset);
    }
}
