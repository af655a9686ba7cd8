use crate::model::{NewUser, Role, User, UserUpdate};
use crate::mvi::UiState;

/// Fields of an account being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Existing(User),
    New(UserDraft),
}

/// What a submitted dialog asks the users screen to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditUserOutcome {
    Update { id: String, update: UserUpdate },
    Create(NewUser),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditUserState {
    #[default]
    Hidden,
    Visible {
        target: EditTarget,
        role: Role,
        active: bool,
        /// Change flags, refreshed by every role or status intent.
        role_changed: bool,
        active_changed: bool,
        saving: bool,
        error: Option<String>,
    },
}

impl UiState for EditUserState {}

impl EditUserState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(
            self,
            Self::Visible {
                target: EditTarget::Existing(_),
                ..
            }
        )
    }

    pub fn has_changes(&self) -> bool {
        match self {
            Self::Visible {
                role_changed,
                active_changed,
                ..
            } => *role_changed || *active_changed,
            Self::Hidden => false,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Visible { saving: true, .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Visible { error, .. } => error.as_deref(),
            Self::Hidden => None,
        }
    }

    /// Whether the save button is enabled.
    ///
    /// Editing requires at least one change; creating always may submit
    /// (missing fields are reported on submit).
    pub fn can_save(&self) -> bool {
        match self {
            Self::Visible { saving: true, .. } | Self::Hidden => false,
            Self::Visible { .. } => !self.is_edit_mode() || self.has_changes(),
        }
    }

    /// The request the current selections describe.
    ///
    /// An update carries only the fields that changed.
    pub fn outcome(&self) -> Option<EditUserOutcome> {
        let Self::Visible {
            target,
            role,
            active,
            role_changed,
            active_changed,
            ..
        } = self
        else {
            return None;
        };

        Some(match target {
            EditTarget::Existing(user) => EditUserOutcome::Update {
                id: user.uid.clone(),
                update: UserUpdate {
                    role: role_changed.then_some(*role),
                    active: active_changed.then_some(*active),
                    ..UserUpdate::default()
                },
            },
            EditTarget::New(draft) => EditUserOutcome::Create(NewUser {
                name: draft.name.trim().to_string(),
                email: draft.email.trim().to_string(),
                password: draft.password.clone(),
                role: *role,
            }),
        })
    }
}
