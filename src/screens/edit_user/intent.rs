use crate::model::{Role, User};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditUserIntent {
    /// Open for editing `Some(user)`, or for creating a new account.
    Open(Option<User>),
    /// Ignored while a save is in flight.
    Close,
    SelectRole(Role),
    SetActive(bool),
    /// Create mode only, like the other field edits.
    EditName(String),
    EditEmail(String),
    EditPassword(String),
    Submit,
    SaveSucceeded,
    SaveFailed(String),
}

impl Intent for EditUserIntent {}
