use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::user::User;

const UNKNOWN_OWNER: &str = "Unknown";
const UNKNOWN_EMAIL: &str = "N/A";

/// File type of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Xml,
    Zip,
}

/// Owner of a document: a bare user id, or the populated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    Populated(User),
    Id(String),
}

/// A stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "archivo")]
    pub file: String,
    #[serde(rename = "rutaPublica", default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    pub ext: DocumentKind,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "usuario")]
    pub owner: Owner,
    /// ISO-8601 creation timestamp; month filters match on its prefix.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Document {
    pub fn owner_name(&self) -> Cow<'_, str> {
        match &self.owner {
            Owner::Populated(user) if !user.name.is_empty() => Cow::Borrowed(&user.name),
            Owner::Id(id) if !id.is_empty() => Cow::Borrowed(id),
            _ => Cow::Borrowed(UNKNOWN_OWNER),
        }
    }

    pub fn owner_email(&self) -> Cow<'_, str> {
        match &self.owner {
            Owner::Populated(user) if !user.email.is_empty() => Cow::Borrowed(&user.email),
            _ => Cow::Borrowed(UNKNOWN_EMAIL),
        }
    }

    /// Absolute URL of the stored file, if the backend published one.
    pub fn public_url(&self, public_base_url: &str) -> Option<String> {
        self.public_path.as_ref().map(|path| {
            format!(
                "{}/{}",
                public_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_json(owner: &str) -> String {
        format!(
            r#"{{
                "_id": "d1",
                "nombre": "Recibo José",
                "archivo": "abc.pdf",
                "rutaPublica": "/uploads/abc.pdf",
                "ext": "pdf",
                "mime": "application/pdf",
                "size": 1024,
                "usuario": {},
                "createdAt": "2024-03-05T10:00:00.000Z"
            }}"#,
            owner
        )
    }

    #[test]
    fn owner_as_plain_id() {
        let doc: Document = serde_json::from_str(&doc_json(r#""u1""#)).unwrap();
        assert_eq!(doc.owner, Owner::Id("u1".into()));
        assert_eq!(doc.owner_name(), "u1");
        assert_eq!(doc.owner_email(), "N/A");
    }

    #[test]
    fn owner_as_populated_user() {
        let owner = r#"{"uid": "u1", "nombre": "Ana", "email": "ana@example.com"}"#;
        let doc: Document = serde_json::from_str(&doc_json(owner)).unwrap();
        assert_eq!(doc.owner_name(), "Ana");
        assert_eq!(doc.owner_email(), "ana@example.com");
        assert_eq!(doc.ext, DocumentKind::Pdf);
    }

    #[test]
    fn empty_owner_falls_back() {
        let doc: Document = serde_json::from_str(&doc_json(r#""""#)).unwrap();
        assert_eq!(doc.owner_name(), "Unknown");
    }

    #[test]
    fn public_url_joins_base_and_path() {
        let doc: Document = serde_json::from_str(&doc_json(r#""u1""#)).unwrap();
        assert_eq!(
            doc.public_url("http://localhost:3000/").as_deref(),
            Some("http://localhost:3000/uploads/abc.pdf")
        );

        let mut doc = doc;
        doc.public_path = None;
        assert_eq!(doc.public_url("http://localhost:3000"), None);
    }
}
