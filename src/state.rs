use crate::domain::RecordStore;
use crate::session::SessionStore;

/// Everything a request handler needs: the immutable record store and the
/// per-browser dashboard sessions.
pub struct AppState {
    pub store: RecordStore,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: RecordStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }
}
