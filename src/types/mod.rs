pub mod identifiers;
pub mod request;

pub use identifiers::{AuthorId, DocumentId, DocumentIdError};
pub use request::SearchRequest;
