use crate::api::ApiError;
use crate::mvi::Reducer;
use crate::screens::pending::ActionOutcome;

use super::intent::EditUserIntent;
use super::reducer::EditUserReducer;
use super::state::{EditUserOutcome, EditUserState};

const SAVE_FAILED: &str = "Could not save the user";
const ALREADY_SAVING: &str = "Another change to this user is still in progress";

/// Holds the edit-user dialog state and feeds it intents.
#[derive(Debug, Default)]
pub struct EditUserDialog {
    state: EditUserState,
}

impl EditUserDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditUserState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: EditUserIntent) {
        EditUserReducer::apply(&mut self.state, intent);
    }

    /// Submit the form; returns the request to run when it was accepted.
    pub fn submit(&mut self) -> Option<EditUserOutcome> {
        self.dispatch(EditUserIntent::Submit);
        if self.state.is_saving() {
            self.state.outcome()
        } else {
            None
        }
    }

    /// Close on success or show the failure.
    pub fn finish<R>(&mut self, result: &ActionOutcome<R>) {
        let intent = match result {
            ActionOutcome::Completed(_) => EditUserIntent::SaveSucceeded,
            ActionOutcome::Failed(err) => EditUserIntent::SaveFailed(failure_message(err)),
            ActionOutcome::Rejected => EditUserIntent::SaveFailed(ALREADY_SAVING.to_string()),
        };
        self.dispatch(intent);
    }
}

fn failure_message(err: &ApiError) -> String {
    err.message_or(SAVE_FAILED)
}
