use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// A multi-criteria search request.
///
/// Every field is optional; an absent or empty field places no constraint on
/// that dimension. A default request therefore matches every stored
/// document. The five predicates are independent and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive title prefixes; a document matches if its title
    /// starts with at least one of them.
    #[serde(default)]
    pub title_prefixes: Vec<String>,

    /// Case-insensitive content substrings; a document matches if its
    /// content contains at least one of them.
    #[serde(default)]
    pub contains_contents: Vec<String>,

    /// Exact author ids; a document matches if its author id is a member.
    #[serde(default)]
    pub author_ids: Vec<AuthorId>,

    /// Inclusive lower bound on the creation timestamp.
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,

    /// Inclusive upper bound on the creation timestamp.
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}
