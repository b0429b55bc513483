//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::user::UserService;

/// State injected into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// User service backing the /api/users routes.
    pub users: Arc<UserService>,
    /// Process start marker used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state.
    pub fn new(users: UserService) -> Self {
        Self {
            users: Arc::new(users),
            started_at: Instant::now(),
        }
    }
}
