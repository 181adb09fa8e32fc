pub mod providers;
pub mod store;

pub use providers::{Clock, IdProvider, SystemClock, UuidIdProvider};
pub use store::DocumentRepository;
