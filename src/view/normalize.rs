//! Case- and diacritic-insensitive text matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold `text` for search: canonical decomposition, combining marks
/// stripped, then lowercased. `"José"` becomes `"jose"`.
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A search query folded once and matched against many candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Returns `None` for a blank query, which means "no text filter".
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(normalize_text(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the folded candidate contains the folded query.
    pub fn matches(&self, candidate: &str) -> bool {
        normalize_text(candidate).contains(&self.0)
    }
}
