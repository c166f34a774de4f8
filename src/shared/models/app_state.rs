use std::sync::Arc;
use crate::data_access::task_store::TaskStore;

/// Shared request-handler state. The store is injected here so tests can
/// substitute an in-memory implementation.
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}

pub type SharedState = Arc<AppState>;
