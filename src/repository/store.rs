use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::document::Document;
use crate::repository::providers::{Clock, IdProvider, SystemClock, UuidIdProvider};
use crate::search;
use crate::types::identifiers::DocumentId;
use crate::types::request::SearchRequest;

/// The single source of truth: an owning map from id to document.
///
/// The repository is generic over its two collaborators so tests can
/// substitute deterministic ids and a fixed clock. `save` takes `&mut self`
/// and reads take `&self`; callers needing shared access across threads wrap
/// the repository in a lock — no internal synchronization is provided.
#[derive(Debug)]
pub struct DocumentRepository<I = UuidIdProvider, C = SystemClock> {
    documents: HashMap<DocumentId, Document>,
    id_provider: I,
    clock: C,
}

impl DocumentRepository {
    pub fn new() -> Self {
        Self::with_providers(UuidIdProvider, SystemClock)
    }
}

impl Default for DocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C> DocumentRepository<I, C>
where
    I: IdProvider,
    C: Clock,
{
    pub fn with_providers(id_provider: I, clock: C) -> Self {
        Self {
            documents: HashMap::new(),
            id_provider,
            clock,
        }
    }

    /// Upsert a document, keyed by its id.
    ///
    /// A missing or blank id marks a new document: a fresh id is generated,
    /// and `created` — if the caller left it unset — is taken from the
    /// clock. A caller-supplied `created` on a new document is preserved.
    ///
    /// When the id names an already-stored document, the stored `created`
    /// wins over whatever the caller passed: the creation timestamp is set
    /// exactly once and never overwritten. When the id is unknown to the
    /// store, the caller's `created` is kept exactly as passed, even unset —
    /// no timestamp is synthesized on that branch (see DESIGN.md on this
    /// asymmetry with the blank-id path).
    ///
    /// Total over any input document; never fails.
    pub fn save(&mut self, mut document: Document) -> &Document {
        let id = match document.id.take().filter(|id| !id.is_blank()) {
            None => {
                if document.created.is_none() {
                    document.created = Some(self.clock.now());
                }
                self.id_provider.generate()
            }
            Some(id) => {
                if let Some(stored) = self.documents.get(&id) {
                    document.created = stored.created;
                }
                id
            }
        };
        document.id = Some(id.clone());

        match self.documents.entry(id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(document);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(document),
        }
    }

    /// Exact id lookup. An empty or unknown id yields `None`, never an error.
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Evaluate every stored document against the request's predicates.
    /// Result order is unspecified (map iteration order).
    pub fn search(&self, request: &SearchRequest) -> Vec<&Document> {
        search::execute(self.documents.values(), request)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over all stored documents, in unspecified order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }
}
