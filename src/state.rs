use crate::db::DocumentStore;
use std::sync::Arc;

/// Shared handler context, built once at startup and registered as
/// `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
