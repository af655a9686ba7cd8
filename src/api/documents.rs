use serde::{Deserialize, Serialize};

use crate::model::Document;

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Deserialize)]
struct DocumentList {
    #[serde(default, rename = "documentos")]
    documents: Vec<Document>,
}

// The single-document endpoints reuse the plural key.
#[derive(Deserialize)]
struct DocumentEnvelope {
    #[serde(rename = "documento", alias = "documentos")]
    document: Document,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    msg: String,
}

/// Editable document fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentChanges {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Document listing and maintenance endpoints.
#[derive(Clone)]
pub struct DocumentsApi {
    client: ApiClient,
}

impl DocumentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Documents owned by `user_id`.
    pub async fn mine(&self, user_id: &str) -> Result<Vec<Document>, ApiError> {
        let list: DocumentList = self
            .client
            .get(&format!("/documentos/mis-documentos/{}", user_id))
            .await?;
        Ok(list.documents)
    }

    /// Every document, with populated owners. Admin only.
    pub async fn all(&self) -> Result<Vec<Document>, ApiError> {
        let list: DocumentList = self.client.get("/documentos").await?;
        Ok(list.documents)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Document, ApiError> {
        let envelope: DocumentEnvelope = self
            .client
            .get(&format!("/documentos/editar-documento/{}", id))
            .await?;
        Ok(envelope.document)
    }

    pub async fn create(&self, changes: &DocumentChanges) -> Result<Document, ApiError> {
        let envelope: DocumentEnvelope = self.client.post("/documentos", changes).await?;
        Ok(envelope.document)
    }

    pub async fn update(&self, id: &str, changes: &DocumentChanges) -> Result<Document, ApiError> {
        let envelope: DocumentEnvelope = self
            .client
            .put(&format!("/documentos/editar-documento/{}", id), changes)
            .await?;
        Ok(envelope.document)
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        let response: MessageResponse = self.client.delete(&format!("/documentos/{}", id)).await?;
        Ok(response.msg)
    }
}
