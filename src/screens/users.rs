use std::borrow::Cow;

use crate::api::{UploadFile, UploadReceipt, UploadsApi, UsersApi};
use crate::config::Config;
use crate::model::{User, UserUpdate};
use crate::resource::{LoadHandle, LoadOutcome, ResourceEngine};
use crate::view::ViewSpec;

use super::edit_user::{EditUserDialog, EditUserOutcome};
use super::list::ListScreen;
use super::pending::ActionOutcome;

/// Selector key matching [`Role::as_str`](crate::model::Role::as_str).
pub const ROLE_SELECTOR: &str = "role";
/// Selector key matching [`User::status_label`].
pub const STATUS_SELECTOR: &str = "status";

const ROLE_FAILED: &str = "Could not change the role";
const STATUS_FAILED: &str = "Could not change the user status";
const UPDATE_FAILED: &str = "Could not update the user";
const CREATE_FAILED: &str = "Could not create the user";
const UPLOAD_FAILED: &str = "Could not upload the files";
const NEW_USER_KEY: &str = "new-user";

fn user_name(user: &User) -> Cow<'_, str> {
    Cow::Borrowed(&user.name)
}

fn user_email(user: &User) -> Cow<'_, str> {
    Cow::Borrowed(&user.email)
}

fn user_role(user: &User) -> Cow<'_, str> {
    Cow::Borrowed(user.role.as_str())
}

fn user_status(user: &User) -> Cow<'_, str> {
    Cow::Borrowed(user.status_label())
}

/// Account administration: role and status switches, the edit dialog's
/// requests, and uploads on behalf of a user.
pub struct UsersScreen {
    list: ListScreen<User>,
    api: UsersApi,
    upload: UploadPanel,
}

impl UsersScreen {
    pub fn new(api: UsersApi, uploads: UploadsApi, config: &Config) -> Self {
        let spec = ViewSpec::new()
            .search(user_name)
            .search(user_email)
            .selector(ROLE_SELECTOR, user_role)
            .selector(STATUS_SELECTOR, user_status);
        Self {
            list: ListScreen::new("users", spec, &config.view),
            api,
            upload: UploadPanel::new(uploads),
        }
    }

    pub fn list(&self) -> &ListScreen<User> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListScreen<User> {
        &mut self.list
    }

    pub fn upload(&self) -> &UploadPanel {
        &self.upload
    }

    pub fn upload_mut(&mut self) -> &mut UploadPanel {
        &mut self.upload
    }

    pub fn load(&self) -> LoadHandle {
        let api = self.api.clone();
        self.list.load(async move { api.list().await })
    }

    /// Switch `user` to the other role, then reload the list.
    pub async fn change_role(&self, user: &User) -> ActionOutcome {
        let update = UserUpdate {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            role: Some(user.role.toggled()),
            active: None,
        };
        let outcome = self
            .list
            .run_action(&user.uid, ROLE_FAILED, self.api.update(&user.uid, &update))
            .await;

        if outcome.is_completed() {
            tracing::info!(user = %user.uid, role = user.role.toggled().as_str(), "role changed");
            self.load().settled().await;
        }
        outcome.map(|_| ())
    }

    /// Flip the active flag of user `id` and patch the list in place.
    ///
    /// On failure the list keeps the previous value.
    pub async fn toggle_status(&self, id: &str) -> ActionOutcome {
        let outcome = self
            .list
            .run_action(id, STATUS_FAILED, self.api.toggle_status(id))
            .await;

        if let ActionOutcome::Completed(updated) = &outcome {
            tracing::info!(user = id, active = updated.active, "status changed");
            self.list.engine().update_data(|users| {
                if let Some(slot) = users.iter_mut().find(|user| user.uid == updated.uid) {
                    *slot = updated.clone();
                }
            });
            self.list.notices().success(if updated.active {
                "User activated"
            } else {
                "User deactivated"
            });
        }
        outcome.map(|_| ())
    }

    /// Run the request produced by the edit dialog, then reload the list.
    pub async fn apply_edit(&self, edit: EditUserOutcome) -> ActionOutcome {
        let outcome = match &edit {
            EditUserOutcome::Update { id, update } => {
                self.list
                    .run_action(id, UPDATE_FAILED, self.api.update(id, update))
                    .await
            }
            EditUserOutcome::Create(new_user) => {
                self.list
                    .run_action(NEW_USER_KEY, CREATE_FAILED, self.api.create(new_user))
                    .await
            }
        };

        if let ActionOutcome::Completed(user) = &outcome {
            tracing::info!(user = %user.uid, "user saved");
            self.list.notices().success("User saved");
            self.load().settled().await;
        }
        outcome.map(|_| ())
    }

    /// Submit `dialog` and report the result back to it.
    ///
    /// Returns `None` when the dialog refused to submit (no changes, missing
    /// fields, already saving).
    pub async fn save_edit(&self, dialog: &mut EditUserDialog) -> Option<ActionOutcome> {
        let edit = dialog.submit()?;
        let outcome = self.apply_edit(edit).await;
        dialog.finish(&outcome);
        Some(outcome)
    }
}

/// Files picked for upload on behalf of one user.
///
/// The upload itself runs through a [`ResourceEngine`], so "uploading" is
/// its loading flag and the result message comes from its data or error.
pub struct UploadPanel {
    api: UploadsApi,
    selected: Option<User>,
    files: Vec<UploadFile>,
    result: ResourceEngine<UploadReceipt>,
}

impl UploadPanel {
    fn new(api: UploadsApi) -> Self {
        Self {
            api,
            selected: None,
            files: Vec::new(),
            result: ResourceEngine::new("upload"),
        }
    }

    /// Choose the target user; clears the files and the last result.
    pub fn pick(&mut self, user: User) {
        self.selected = Some(user);
        self.files.clear();
        self.result.reset();
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn set_files(&mut self, files: Vec<UploadFile>) {
        self.files = files;
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    /// Out-of-range indexes are ignored.
    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.result.is_loading()
    }

    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.files.is_empty() && !self.is_uploading()
    }

    /// Upload the picked files. Does nothing without a user or files.
    ///
    /// The file list is cleared once the upload succeeds.
    pub async fn upload(&mut self) -> Option<LoadOutcome> {
        if !self.can_upload() {
            return None;
        }
        let user_id = self.selected.as_ref()?.uid.clone();
        let files = self.files.clone();
        let api = self.api.clone();

        let outcome = self
            .result
            .load(async move { api.upload_for_user(&user_id, files).await })
            .settled()
            .await;

        if self.result.has_data() {
            self.files.clear();
        }
        Some(outcome)
    }

    /// Message describing the last upload, if one settled.
    pub fn result_message(&self) -> Option<String> {
        let state = self.result.snapshot();
        if let Some(receipt) = &state.data {
            return Some(format!("Uploaded {} file(s)", receipt.documents.len()));
        }
        state.error.map(|err| err.message_or(UPLOAD_FAILED))
    }
}
