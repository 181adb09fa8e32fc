use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::Author;
use crate::types::identifiers::DocumentId;

/// The atomic unit of content.
///
/// An incoming document may lack both `id` and `created`; the repository's
/// save operation fills them in. Once a document is stored, its `id` is
/// always present and non-empty, and its `created` timestamp is never
/// overwritten by later saves of the same id.
///
/// No validation is performed on `title`, `content`, or `author` — absent
/// or empty values pass through uninspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// An unsaved document: no id, no creation timestamp.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Document {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
