//! Injection step tracking
//!
//! The setup flow is presented to the user as four steps, each pending,
//! succeeded or failed. The engine never renders anything itself; it sends
//! [`StepEvent`] messages over an mpsc channel and the client draws them.

use serde::Serialize;
use std::sync::mpsc::Sender;

/// The four steps of one injection run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Credentials,
    LocateProject,
    ResolveEntryPoint,
    ApplyEdit,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Credentials,
        Step::LocateProject,
        Step::ResolveEntryPoint,
        Step::ApplyEdit,
    ];

    /// 1-based position for `[n/4]` style rendering
    pub fn position(self) -> usize {
        match self {
            Step::Credentials => 1,
            Step::LocateProject => 2,
            Step::ResolveEntryPoint => 3,
            Step::ApplyEdit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Credentials => "Validate credentials",
            Step::LocateProject => "Locate Xcode project",
            Step::ResolveEntryPoint => "Resolve entry point",
            Step::ApplyEdit => "Insert SDK initialization",
        }
    }
}

/// Per-step state as observed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepState {
    #[default]
    Pending,
    Success,
    Failed,
}

/// A state transition message sent across the UI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    pub step: Step,
    pub state: StepState,
}

/// Client-side record of all four step states
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepTracker {
    states: [StepState; 4],
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: StepEvent) {
        self.states[event.step.position() - 1] = event.state;
    }

    pub fn state(&self, step: Step) -> StepState {
        self.states[step.position() - 1]
    }

    pub fn all_succeeded(&self) -> bool {
        self.states.iter().all(|s| *s == StepState::Success)
    }
}

/// Engine-side sender half of the boundary. Absent sender means the caller
/// does not observe progress; sends to a dropped receiver are ignored.
#[derive(Debug, Clone, Default)]
pub struct StepNotifier {
    sender: Option<Sender<StepEvent>>,
}

impl StepNotifier {
    pub fn new(sender: Sender<StepEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Notifier that drops every event
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn notify(&self, step: Step, state: StepState) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(StepEvent { step, state });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_tracker_starts_pending() {
        let tracker = StepTracker::new();
        for step in Step::ALL {
            assert_eq!(tracker.state(step), StepState::Pending);
        }
        assert!(!tracker.all_succeeded());
    }

    #[test]
    fn test_failed_step_leaves_later_steps_pending() {
        let mut tracker = StepTracker::new();
        tracker.record(StepEvent {
            step: Step::Credentials,
            state: StepState::Success,
        });
        tracker.record(StepEvent {
            step: Step::LocateProject,
            state: StepState::Failed,
        });

        assert_eq!(tracker.state(Step::LocateProject), StepState::Failed);
        assert_eq!(tracker.state(Step::ResolveEntryPoint), StepState::Pending);
        assert_eq!(tracker.state(Step::ApplyEdit), StepState::Pending);
    }

    #[test]
    fn test_notifier_sends_events_in_order() {
        let (tx, rx) = mpsc::channel();
        let notifier = StepNotifier::new(tx);

        notifier.notify(Step::Credentials, StepState::Success);
        notifier.notify(Step::LocateProject, StepState::Success);
        drop(notifier);

        let events: Vec<StepEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].step, Step::Credentials);
        assert_eq!(events[1].step, Step::LocateProject);
    }

    #[test]
    fn test_silent_notifier_does_not_panic() {
        StepNotifier::silent().notify(Step::ApplyEdit, StepState::Failed);
    }

    #[test]
    fn test_notify_after_receiver_dropped_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        StepNotifier::new(tx).notify(Step::Credentials, StepState::Success);
    }
}
