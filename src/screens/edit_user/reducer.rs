use crate::model::{Role, User};
use crate::mvi::Reducer;

use super::intent::EditUserIntent;
use super::state::{EditTarget, EditUserState, UserDraft};

const MISSING_FIELDS: &str = "Please fill in all fields";

pub struct EditUserReducer;

impl Reducer for EditUserReducer {
    type State = EditUserState;
    type Intent = EditUserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditUserIntent::Open(user) => open(user),
            EditUserIntent::Close => match state {
                EditUserState::Visible { saving: true, .. } => state,
                _ => EditUserState::Hidden,
            },
            EditUserIntent::SelectRole(new_role) => match state {
                EditUserState::Visible {
                    target,
                    active,
                    saving: false,
                    error,
                    ..
                } => mark_changed(target, new_role, active, error),
                other => other,
            },
            EditUserIntent::SetActive(new_active) => match state {
                EditUserState::Visible {
                    target,
                    role,
                    saving: false,
                    error,
                    ..
                } => mark_changed(target, role, new_active, error),
                other => other,
            },
            EditUserIntent::EditName(value) => edit_draft(state, |draft| draft.name = value),
            EditUserIntent::EditEmail(value) => edit_draft(state, |draft| draft.email = value),
            EditUserIntent::EditPassword(value) => {
                edit_draft(state, |draft| draft.password = value)
            }
            EditUserIntent::Submit => submit(state),
            EditUserIntent::SaveSucceeded => match state {
                EditUserState::Visible { saving: true, .. } => EditUserState::Hidden,
                other => other,
            },
            EditUserIntent::SaveFailed(message) => match state {
                EditUserState::Visible {
                    target,
                    role,
                    active,
                    role_changed,
                    active_changed,
                    ..
                } => EditUserState::Visible {
                    target,
                    role,
                    active,
                    role_changed,
                    active_changed,
                    saving: false,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}

fn open(user: Option<User>) -> EditUserState {
    let (target, role, active) = match user {
        Some(user) => {
            let (role, active) = (user.role, user.active);
            (EditTarget::Existing(user), role, active)
        }
        None => (EditTarget::New(UserDraft::default()), Role::User, true),
    };
    EditUserState::Visible {
        target,
        role,
        active,
        role_changed: false,
        active_changed: false,
        saving: false,
        error: None,
    }
}

/// Rebuild the change flags against the values the dialog opened with.
fn mark_changed(
    target: EditTarget,
    role: Role,
    active: bool,
    error: Option<String>,
) -> EditUserState {
    let (original_role, original_active) = match &target {
        EditTarget::Existing(user) => (user.role, user.active),
        EditTarget::New(_) => (Role::User, true),
    };
    EditUserState::Visible {
        target,
        role,
        active,
        role_changed: role != original_role,
        active_changed: active != original_active,
        saving: false,
        error,
    }
}

fn edit_draft(state: EditUserState, edit: impl FnOnce(&mut UserDraft)) -> EditUserState {
    match state {
        EditUserState::Visible {
            target: EditTarget::New(mut draft),
            role,
            active,
            role_changed,
            active_changed,
            saving: false,
            error,
        } => {
            edit(&mut draft);
            EditUserState::Visible {
                target: EditTarget::New(draft),
                role,
                active,
                role_changed,
                active_changed,
                saving: false,
                error,
            }
        }
        other => other,
    }
}

fn submit(state: EditUserState) -> EditUserState {
    if !state.can_save() {
        return state;
    }
    match state {
        EditUserState::Visible {
            target,
            role,
            active,
            role_changed,
            active_changed,
            ..
        } => {
            let complete = match &target {
                EditTarget::Existing(_) => true,
                EditTarget::New(draft) => draft.is_complete(),
            };
            EditUserState::Visible {
                target,
                role,
                active,
                role_changed,
                active_changed,
                saving: complete,
                error: (!complete).then(|| MISSING_FIELDS.to_string()),
            }
        }
        other => other,
    }
}
