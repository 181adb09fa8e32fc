use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Document id must be non-empty")]
    Empty,
}

impl DocumentId {
    /// Create a DocumentId from an arbitrary string, rejecting empty input.
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(DocumentId(id))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        DocumentId(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the wrapped string is empty.
    ///
    /// `new` rejects empty ids, but `#[serde(transparent)]` deserialization
    /// does not go through `new`, so the store re-checks on save.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

// Lets the store key its map by DocumentId while looking up by &str.
impl std::borrow::Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identity of an author. No constraints beyond being a string; author-id
/// search matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        AuthorId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
