use std::borrow::Cow;
use std::sync::Arc;

use crate::api::{ApiError, DocumentsApi};
use crate::config::Config;
use crate::model::Document;
use crate::resource::LoadHandle;
use crate::session::Session;
use crate::view::ViewSpec;

use super::list::ListScreen;

const NOT_AUTHENTICATED: &str = "User is not authenticated";

fn document_name(doc: &Document) -> Cow<'_, str> {
    Cow::Borrowed(&doc.name)
}

fn document_date(doc: &Document) -> Cow<'_, str> {
    Cow::Borrowed(&doc.created_at)
}

/// Documents owned by the logged-in user.
///
/// Searchable by name, filterable by upload month.
pub struct MyDocumentsScreen {
    list: ListScreen<Document>,
    api: DocumentsApi,
    session: Arc<dyn Session>,
    public_base_url: String,
}

impl MyDocumentsScreen {
    pub fn new(api: DocumentsApi, session: Arc<dyn Session>, config: &Config) -> Self {
        let spec = ViewSpec::new().search(document_name).date(document_date);
        Self {
            list: ListScreen::new("my_documents", spec, &config.view),
            api,
            session,
            public_base_url: config.api.public_base_url.clone(),
        }
    }

    pub fn list(&self) -> &ListScreen<Document> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListScreen<Document> {
        &mut self.list
    }

    /// Load the current user's documents.
    ///
    /// Without a logged-in user nothing is requested and the list shows a
    /// precondition error instead, and a load still in flight
    /// from before the logout is dropped.
    pub fn load(&self) -> Option<LoadHandle> {
        let Some(user_id) = self.session.current_user_id() else {
            tracing::warn!("my documents requested without a session");
            self.list
                .engine()
                .fail(ApiError::precondition(NOT_AUTHENTICATED));
            return None;
        };

        let api = self.api.clone();
        Some(self.list.load(async move { api.mine(&user_id).await }))
    }

    /// Link to open a document in the browser.
    pub fn public_url(&self, doc: &Document) -> Option<String> {
        doc.public_url(&self.public_base_url)
    }
}
