//! In-memory DocumentStore used by unit and handler tests.

use crate::firestore::store::DocumentStore;
use crate::firestore::types::{Document, Value};
use crate::utils::error::AppError;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const FAKE_NAME_PREFIX: &str = "projects/test/databases/(default)/documents";

/// Keyed by slash-joined path. BTreeMap keeps listings deterministic.
pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, HashMap<String, Value>>>,
    next_id: AtomicUsize,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(BTreeMap::new()),
            next_id: AtomicUsize::new(1),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, path: &[&str], fields: HashMap<String, Value>) {
        self.docs.lock().unwrap().insert(path.join("/"), fields);
    }

    /// Number of store reads issued, used to assert that validation
    /// failures never touch the store.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn document(key: &str, fields: HashMap<String, Value>) -> Document {
        Document {
            name: format!("{}/{}", FAKE_NAME_PREFIX, key),
            fields,
            create_time: None,
            update_time: None,
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, collection: &[&str]) -> Result<Vec<Document>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let prefix = format!("{}/", collection.join("/"));
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .filter(|(key, _)| {
                key.starts_with(&prefix) && !key[prefix.len()..].contains('/')
            })
            .map(|(key, fields)| Self::document(key, fields.clone()))
            .collect())
    }

    async fn get_document(&self, path: &[&str]) -> Result<Option<Document>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let key = path.join("/");
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .get(&key)
            .map(|fields| Self::document(&key, fields.clone())))
    }

    async fn add_document(
        &self,
        collection: &[&str],
        fields: HashMap<String, Value>,
    ) -> Result<Document, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}/auto{}", collection.join("/"), id);
        self.docs.lock().unwrap().insert(key.clone(), fields.clone());
        Ok(Self::document(&key, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn lists_only_direct_children() {
        let store = MemoryStore::new();
        store.insert(&["CS101", "2024-01-10"], HashMap::new());
        store.insert(&["CS101", "2024-01-17"], HashMap::new());
        // Sub-collection document must not appear in the date listing
        store.insert(
            &["CS101", "2024-01-10", "CS", "REG1"],
            HashMap::from([("name".to_string(), Value::string("John"))]),
        );

        let dates = store.list_documents(&["CS101"]).await.unwrap();
        let ids: Vec<&str> = dates.iter().map(Document::id).collect();
        assert_eq!(ids, vec!["2024-01-10", "2024-01-17"]);
    }

    #[actix_rt::test]
    async fn add_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.add_document(&["users"], HashMap::new()).await.unwrap();
        let b = store.add_document(&["users"], HashMap::new()).await.unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(store.list_documents(&["users"]).await.unwrap().len(), 2);
    }
}
