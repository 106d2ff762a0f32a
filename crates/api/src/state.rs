use std::sync::Arc;

use videoteca_db::store::VideoStore;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The store is injected here rather than held as a process-wide handle,
/// so tests can substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VideoStore>,
}
