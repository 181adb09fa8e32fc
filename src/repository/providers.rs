use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::identifiers::DocumentId;

/// Collaborator producing unique identifier strings.
///
/// Implementations must produce collision-free ids for the lifetime of the
/// store. The provider is stateless from the repository's point of view;
/// implementations needing state use interior mutability.
pub trait IdProvider {
    fn generate(&self) -> DocumentId;
}

/// v0: Random UUIDv4 ids.
#[derive(Debug, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn generate(&self) -> DocumentId {
        DocumentId::from_uuid(Uuid::new_v4())
    }
}

/// Collaborator producing the current instant for `created` assignment.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// v0: Wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
