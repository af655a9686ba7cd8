use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::model::Document;

use super::client::ApiClient;
use super::error::ApiError;

/// One file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Server answer to an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub msg: String,
    #[serde(default, rename = "documentos")]
    pub documents: Vec<Document>,
}

/// Multipart upload and stored-file URLs.
#[derive(Clone)]
pub struct UploadsApi {
    client: ApiClient,
}

impl UploadsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload `files` on behalf of `user_id`, each as a `files` part.
    pub async fn upload_for_user(
        &self,
        user_id: &str,
        files: Vec<UploadFile>,
    ) -> Result<UploadReceipt, ApiError> {
        if files.is_empty() {
            return Err(ApiError::precondition("Select at least one file"));
        }

        let form = files.into_iter().fold(Form::new(), |form, file| {
            form.part("files", Part::bytes(file.bytes).file_name(file.name))
        });

        self.client
            .post_multipart(&format!("/upload/{}", user_id), form)
            .await
    }

    /// URL that serves a stored file by name.
    pub fn file_url(&self, file_name: &str) -> String {
        self.client.url(&format!("/upload/ver/{}", file_name))
    }
}
