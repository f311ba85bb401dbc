use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::infra::memory::InMemoryLoginSessionStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub sessions: InMemoryLoginSessionStore,
    pub clock: Arc<dyn Clock>,
    pub jwt_secret: String,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(jwt_secret: String, cookie_secure: bool) -> Self {
        Self {
            sessions: InMemoryLoginSessionStore::new(),
            clock: Arc::new(SystemClock),
            jwt_secret,
            cookie_secure,
        }
    }

    pub fn session_store(&self) -> InMemoryLoginSessionStore {
        self.sessions.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
