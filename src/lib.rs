//! In-memory document repository with upsert-by-id and multi-criteria search.
//!
//! `docstore` provides a single owning store of documents keyed by id, an
//! upsert operation that assigns identifiers and preserves creation
//! timestamps, and a composable AND-combined predicate model for search.
//! All three operations (`save`, `search`, `find_by_id`) are total — they
//! never fail over their declared input shape.
//!
//! Id generation and the clock are collaborators behind traits, so callers
//! (and tests) can substitute deterministic implementations.

pub mod document;
pub mod repository;
pub mod search;
pub mod types;
