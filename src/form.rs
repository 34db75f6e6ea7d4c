use crate::{config::BehaviorConfig, scheduler::Scheduler, view::PageView};
use std::{cell::Cell, rc::Rc};

const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
const SENT_LABEL: &str = r#"<i class="fas fa-check"></i> Sent Successfully!"#;
const SENT_BACKGROUND: &str = "#00ff88";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Markup for the submit control; `None` restores the original label.
    pub fn label_html(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING_LABEL),
            Self::Sent => Some(SENT_LABEL),
        }
    }

    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some(SENT_BACKGROUND),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Contact form stand-in: every submission "succeeds" after a fixed delay.
#[derive(Default)]
pub struct FormSimulator {
    phase: Rc<Cell<SubmitPhase>>,
}

impl FormSimulator {
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn submit<V, S>(&self, view: &Rc<V>, scheduler: &S, config: &BehaviorConfig) -> bool
    where
        V: PageView,
        S: Scheduler,
    {
        if self.phase.get() != SubmitPhase::Idle {
            return false;
        }

        self.phase.set(SubmitPhase::Sending);
        view.set_submit_phase(SubmitPhase::Sending);

        let phase = Rc::clone(&self.phase);
        let view = Rc::clone(view);
        let reset_scheduler = scheduler.clone();
        let sent_display_ms = config.form_sent_display_ms;

        scheduler.after_detached(config.form_sending_ms, move || {
            phase.set(SubmitPhase::Sent);
            view.set_submit_phase(SubmitPhase::Sent);
            view.reset_form_fields();

            reset_scheduler.after_detached(sent_display_ms, move || {
                phase.set(SubmitPhase::Idle);
                view.set_submit_phase(SubmitPhase::Idle);
            });
        });

        true
    }
}
