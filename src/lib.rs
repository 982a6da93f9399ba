pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_dir, BlobStore};
pub use store::RecordStore;
