pub mod author;
pub mod document;

pub use crate::types::identifiers::{AuthorId, DocumentId};
pub use author::Author;
pub use document::Document;
