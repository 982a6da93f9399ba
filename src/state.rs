use crate::storage::BlobStore;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub blob: BlobStore,
    pub store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new(blob: BlobStore, store: RecordStore) -> Self {
        Self {
            blob,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
