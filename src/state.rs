use crate::database::MongoDB;
use crate::firestore::DocumentStore;
use std::sync::Arc;

/// Process-wide handles, built once at startup and injected into every
/// handler through `web::Data` rather than held as globals.
pub struct AppState {
    pub mongo: MongoDB,
    pub firestore: Arc<dyn DocumentStore>,
}
