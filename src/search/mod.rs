pub mod filters;

use crate::document::Document;
use crate::types::request::SearchRequest;

/// Evaluate documents against a request.
///
/// The engine depends on the store only through iteration: any source of
/// documents can be filtered. Matching documents are returned in input
/// order, which for the repository's map is unspecified.
pub fn execute<'a>(
    documents: impl Iterator<Item = &'a Document>,
    request: &SearchRequest,
) -> Vec<&'a Document> {
    documents.filter(|doc| matches(doc, request)).collect()
}

/// True iff the document satisfies every predicate of the request.
///
/// The five predicates are independent; their evaluation order does not
/// affect the result. An unconstrained request matches everything.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    filters::matches_title_prefixes(document, &request.title_prefixes)
        && filters::matches_contains_contents(document, &request.contains_contents)
        && filters::matches_author_ids(document, &request.author_ids)
        && filters::matches_created_from(document, request.created_from)
        && filters::matches_created_to(document, request.created_to)
}
