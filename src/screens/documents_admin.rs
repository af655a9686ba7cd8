use std::borrow::Cow;

use crate::api::DocumentsApi;
use crate::config::Config;
use crate::model::Document;
use crate::resource::LoadHandle;
use crate::view::ViewSpec;

use super::list::ListScreen;
use super::pending::ActionOutcome;

const DELETE_FAILED: &str = "Could not delete the document";
const DELETED: &str = "Document deleted";

fn document_name(doc: &Document) -> Cow<'_, str> {
    Cow::Borrowed(&doc.name)
}

fn document_date(doc: &Document) -> Cow<'_, str> {
    Cow::Borrowed(&doc.created_at)
}

/// Every document in the system, for administrators.
///
/// The query matches the document name, owner name or owner email.
pub struct DocumentsAdminScreen {
    list: ListScreen<Document>,
    api: DocumentsApi,
    public_base_url: String,
}

impl DocumentsAdminScreen {
    pub fn new(api: DocumentsApi, config: &Config) -> Self {
        let spec = ViewSpec::new()
            .search(document_name)
            .search(Document::owner_name)
            .search(Document::owner_email)
            .date(document_date);
        Self {
            list: ListScreen::new("documents_admin", spec, &config.view),
            api,
            public_base_url: config.api.public_base_url.clone(),
        }
    }

    pub fn list(&self) -> &ListScreen<Document> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListScreen<Document> {
        &mut self.list
    }

    pub fn load(&self) -> LoadHandle {
        let api = self.api.clone();
        self.list.load(async move { api.all().await })
    }

    /// Delete document `id`, then reload the list.
    ///
    /// The reload is awaited, so the list is fresh when this returns.
    pub async fn delete(&self, id: &str) -> ActionOutcome {
        let outcome = self
            .list
            .run_action(id, DELETE_FAILED, self.api.delete(id))
            .await;

        if let ActionOutcome::Completed(msg) = &outcome {
            tracing::info!(document = id, "document deleted");
            self.list
                .notices()
                .success(if msg.is_empty() { DELETED } else { msg.as_str() });
            self.load().settled().await;
        }
        outcome.map(|_| ())
    }

    pub fn public_url(&self, doc: &Document) -> Option<String> {
        doc.public_url(&self.public_base_url)
    }
}
