use crate::{config::BehaviorConfig, scheduler::Scheduler, view::PageView};
use std::{cell::Cell, rc::Rc};

/// One-shot typewriter reveal of the hero subtitle.
#[derive(Default)]
pub struct TypingEffect {
    started: Cell<bool>,
}

impl TypingEffect {
    pub fn started(&self) -> bool {
        self.started.get()
    }

    pub fn start<V, S>(&self, view: &Rc<V>, scheduler: &S, text: &str, config: &BehaviorConfig) -> bool
    where
        V: PageView,
        S: Scheduler,
    {
        if self.started.replace(true) {
            return false;
        }

        let chars: Rc<[char]> = text.chars().collect();
        let view = Rc::clone(view);
        let next_scheduler = scheduler.clone();
        let interval_ms = config.typing_interval_ms;

        scheduler.after_detached(config.typing_start_delay_ms, move || {
            type_next(view, next_scheduler, chars, 0, interval_ms);
        });

        true
    }
}

fn type_next<V, S>(view: Rc<V>, scheduler: S, chars: Rc<[char]>, index: usize, interval_ms: u32)
where
    V: PageView,
    S: Scheduler,
{
    if index >= chars.len() {
        return;
    }

    let typed: String = chars[..=index].iter().collect();
    view.set_typed_text(&typed);

    let next_scheduler = scheduler.clone();
    scheduler.after_detached(interval_ms, move || {
        type_next(view, next_scheduler, chars, index + 1, interval_ms);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        scheduler::ManualScheduler,
        view::{RecordingView, ViewEvent},
    };

    #[test]
    fn reveals_one_character_per_interval_after_delay() {
        let config = BehaviorConfig::default();
        let typing = TypingEffect::default();
        let view = Rc::new(RecordingView::default());
        let scheduler = ManualScheduler::default();

        assert!(typing.start(&view, &scheduler, "Hello", &config));

        scheduler.advance(1_499);
        assert_eq!(view.typed_text(), None);

        scheduler.advance(1);
        assert_eq!(view.typed_text().as_deref(), Some("H"));

        scheduler.advance(100);
        assert_eq!(view.typed_text().as_deref(), Some("He"));

        scheduler.advance(299);
        assert_eq!(view.typed_text().as_deref(), Some("Hell"));

        scheduler.advance(1);
        assert_eq!(view.typed_text().as_deref(), Some("Hello"));

        scheduler.advance(10_000);
        assert_eq!(view.count(|event| matches!(event, ViewEvent::Typed(_))), 5);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn never_restarts() {
        let config = BehaviorConfig::default();
        let typing = TypingEffect::default();
        let view = Rc::new(RecordingView::default());
        let scheduler = ManualScheduler::default();

        typing.start(&view, &scheduler, "Hi", &config);
        scheduler.advance(5_000);

        assert!(!typing.start(&view, &scheduler, "Again", &config));
        scheduler.advance(5_000);
        assert_eq!(view.typed_text().as_deref(), Some("Hi"));
        assert!(typing.started());
    }

    #[test]
    fn multibyte_text_advances_by_character() {
        let config = BehaviorConfig::default();
        let typing = TypingEffect::default();
        let view = Rc::new(RecordingView::default());
        let scheduler = ManualScheduler::default();

        typing.start(&view, &scheduler, "héé", &config);
        scheduler.advance(1_600);

        assert_eq!(view.typed_text().as_deref(), Some("hé"));
    }

    #[test]
    fn empty_text_types_nothing() {
        let config = BehaviorConfig::default();
        let typing = TypingEffect::default();
        let view = Rc::new(RecordingView::default());
        let scheduler = ManualScheduler::default();

        typing.start(&view, &scheduler, "", &config);
        scheduler.advance(2_000);

        assert!(view.events().is_empty());
    }
}
