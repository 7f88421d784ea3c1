use crate::firestore::{Document, DocumentStore, Value};
use crate::utils::error::AppError;
use std::collections::HashMap;

const USERS_COLLECTION: &str = "users";

pub async fn add_user(store: &dyn DocumentStore, name: &str) -> Result<(), AppError> {
    let fields = HashMap::from([("name".to_string(), Value::string(name))]);
    store.add_document(&[USERS_COLLECTION], fields).await?;
    Ok(())
}

/// Every user document as `{id, ...fields}`, whatever fields the store holds.
pub async fn list_users(store: &dyn DocumentStore) -> Result<Vec<serde_json::Value>, AppError> {
    let documents = store.list_documents(&[USERS_COLLECTION]).await?;
    Ok(documents.iter().map(Document::to_json_with_id).collect())
}
