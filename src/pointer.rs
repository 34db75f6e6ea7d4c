use crate::{config::BehaviorConfig, view::PageView};

pub const SKILL_CARD_RAISED: &str = "translateY(-10px) scale(1.02)";
pub const SKILL_CARD_RESTING: &str = "translateY(0) scale(1)";
const CARD_PERSPECTIVE_PX: u32 = 1000;
const CARD_HOVER_SCALE: f64 = 1.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "perspective({CARD_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

pub fn card_tilt(client_x: f64, client_y: f64, rect: CardRect, damping: f64) -> Tilt {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;

    Tilt {
        rotate_x: (y - center_y) / damping,
        rotate_y: (center_x - x) / damping,
        scale: CARD_HOVER_SCALE,
    }
}

/// Parallax offset of the orb at `index`; deeper orbs move further.
pub fn orb_offset(
    index: usize,
    pointer_x: f64,
    pointer_y: f64,
    viewport: (f64, f64),
    speed_step: f64,
) -> (f64, f64) {
    let speed = (index as f64 + 1.0) * speed_step;
    let x = pointer_x / viewport.0;
    let y = pointer_y / viewport.1;

    ((x - 0.5) * speed, (y - 0.5) * speed)
}

pub fn orb_transform((x, y): (f64, f64)) -> String {
    format!("translate({x}px, {y}px)")
}

/// Decorative pointer transforms, gated once on the viewport width seen at load.
pub struct PointerEffects {
    enabled: bool,
}

impl PointerEffects {
    pub fn new(viewport_width: f64, config: &BehaviorConfig) -> Self {
        Self {
            enabled: viewport_width > config.desktop_min_width_px,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_pointer_move(&self, view: &impl PageView, pointer_x: f64, pointer_y: f64, config: &BehaviorConfig) {
        if !self.enabled {
            return;
        }

        let viewport = (view.viewport_width(), view.viewport_height());
        if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
            return;
        }

        for index in 0..view.orb_count() {
            let offset = orb_offset(index, pointer_x, pointer_y, viewport, config.orb_speed_step);
            view.set_orb_transform(index, &orb_transform(offset));
        }
    }

    pub fn on_card_move(
        &self,
        view: &impl PageView,
        card: usize,
        client_x: f64,
        client_y: f64,
        rect: CardRect,
        config: &BehaviorConfig,
    ) {
        if !self.enabled {
            return;
        }

        let tilt = card_tilt(client_x, client_y, rect, config.card_tilt_damping);
        view.set_card_transform(card, &tilt.transform());
    }

    pub fn on_card_leave(&self, view: &impl PageView, card: usize) {
        if !self.enabled {
            return;
        }

        view.set_card_transform(card, &Tilt::NEUTRAL.transform());
    }

    pub fn on_skill_card_hover(&self, view: &impl PageView, card: usize, hovered: bool) {
        let transform = if hovered {
            SKILL_CARD_RAISED
        } else {
            SKILL_CARD_RESTING
        };
        view.set_skill_card_transform(card, transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{RecordingView, ViewEvent};

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn tilt_follows_offset_from_card_center() {
        let tilt = card_tilt(100.0, 200.0, RECT, 10.0);

        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.rotate_y, 15.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-10deg) rotateY(15deg) scale(1.02)"
        );
        assert_eq!(card_tilt(250.0, 300.0, RECT, 10.0).transform(), "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1.02)");
    }

    #[test]
    fn leaving_a_card_always_resets_tilt() {
        let config = BehaviorConfig::default();
        let effects = PointerEffects::new(1280.0, &config);
        let view = RecordingView::default();

        effects.on_card_move(&view, 2, 390.0, 210.0, RECT, &config);
        effects.on_card_leave(&view, 2);

        assert_eq!(
            view.last_card_transform(2).as_deref(),
            Some("perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)")
        );
    }

    #[test]
    fn orbs_move_proportionally_to_depth() {
        assert_eq!(orb_offset(0, 640.0, 360.0, (1280.0, 720.0), 20.0), (0.0, 0.0));
        assert_eq!(orb_offset(0, 1280.0, 0.0, (1280.0, 720.0), 20.0), (10.0, -10.0));
        assert_eq!(orb_offset(2, 1280.0, 720.0, (1280.0, 720.0), 20.0), (30.0, 30.0));
        assert_eq!(orb_transform((30.0, -7.5)), "translate(30px, -7.5px)");
    }

    #[test]
    fn pointer_move_updates_every_orb_on_desktop() {
        let config = BehaviorConfig::default();
        let effects = PointerEffects::new(1280.0, &config);
        let view = RecordingView::default();
        view.set_viewport(1280.0, 720.0);
        view.set_orb_count(3);

        effects.on_pointer_move(&view, 1280.0, 720.0, &config);

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Orb(0, "translate(10px, 10px)".to_string()),
                ViewEvent::Orb(1, "translate(20px, 20px)".to_string()),
                ViewEvent::Orb(2, "translate(30px, 30px)".to_string()),
            ]
        );
    }

    #[test]
    fn narrow_viewport_at_load_disables_pointer_effects() {
        let config = BehaviorConfig::default();
        let effects = PointerEffects::new(768.0, &config);
        let view = RecordingView::default();
        view.set_orb_count(2);

        effects.on_pointer_move(&view, 10.0, 10.0, &config);
        effects.on_card_move(&view, 0, 10.0, 10.0, RECT, &config);
        effects.on_card_leave(&view, 0);

        assert!(!effects.enabled());
        assert!(view.events().is_empty());
    }

    #[test]
    fn skill_cards_lift_regardless_of_width() {
        let config = BehaviorConfig::default();
        let effects = PointerEffects::new(375.0, &config);
        let view = RecordingView::default();

        effects.on_skill_card_hover(&view, 1, true);
        effects.on_skill_card_hover(&view, 1, false);

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::SkillCard(1, SKILL_CARD_RAISED.to_string()),
                ViewEvent::SkillCard(1, SKILL_CARD_RESTING.to_string()),
            ]
        );
    }
}
