//! Like / save buttons

use shared::ActionResult;

use super::Presentation;
use crate::client::CrowdfundClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Like,
    Save,
}

/// Local state of a like or save button: the flag and the counter next to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
    pub count: u64,
}

impl ToggleState {
    pub fn new(active: bool, count: u64) -> Self {
        Self { active, count }
    }

    /// Flip the flag and adjust the counter. Returns the state before the
    /// flip so a failed request can restore it.
    pub fn toggle(&mut self) -> ToggleState {
        let previous = *self;
        self.active = !previous.active;
        self.count = if previous.active {
            previous.count.saturating_sub(1)
        } else {
            previous.count + 1
        };
        previous
    }

    pub fn rollback(&mut self, previous: ToggleState) {
        *self = previous;
    }

    /// Keep the optimistic state on success; restore and present the error
    /// otherwise.
    pub fn settle<T>(&mut self, previous: ToggleState, result: &ActionResult<T>) -> Option<Presentation> {
        match result {
            ActionResult::Success(_) => None,
            ActionResult::Failure(err) => {
                self.rollback(previous);
                Some(Presentation::error(err))
            }
        }
    }
}

impl CrowdfundClient {
    /// Flip a like or save button and send the matching request. The state
    /// changes immediately and is restored if the backend refuses.
    pub async fn toggle_feedback(&self, kind: ToggleKind, project_id: i64, state: &mut ToggleState) -> Option<Presentation> {
        let previous = state.toggle();
        let result = match (kind, previous.active) {
            (ToggleKind::Like, false) => self.like_project(project_id).await,
            (ToggleKind::Like, true) => self.unlike_project(project_id).await,
            (ToggleKind::Save, false) => self.save_project(project_id).await,
            (ToggleKind::Save, true) => self.unsave_project(project_id).await,
        };
        state.settle(previous, &result)
    }
}
