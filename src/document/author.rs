use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// Document author. A pure value with no lifecycle of its own; it is
/// embedded by value inside [`Document`](crate::document::Document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Author {
            id: AuthorId::new(id),
            name: name.into(),
        }
    }
}
