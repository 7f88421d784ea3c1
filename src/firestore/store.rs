use crate::firestore::types::{Document, Value};
use crate::utils::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;

/// The document operations the handlers need, abstracted so tests can run
/// against an in-memory store instead of a live Firestore project.
///
/// Paths are passed as slices of raw segments (collection, id, collection,
/// id, ...); implementations own the encoding.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists every document in a collection. An empty vec means the
    /// collection has no documents (Firestore has no "missing collection").
    async fn list_documents(&self, collection: &[&str]) -> Result<Vec<Document>, AppError>;

    /// Fetches a single document, `Ok(None)` when it does not exist.
    async fn get_document(&self, path: &[&str]) -> Result<Option<Document>, AppError>;

    /// Creates a document with a server-assigned id.
    async fn add_document(
        &self,
        collection: &[&str],
        fields: HashMap<String, Value>,
    ) -> Result<Document, AppError>;
}
