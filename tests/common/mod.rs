//! Test utilities and common setup.

use axum::Router;
use roster::api::{self, AppState};
use roster::user::{UserService, UserStore};

/// Create a test application with a freshly seeded user store.
pub fn test_app() -> Router {
    let users = UserService::new(UserStore::new());
    let state = AppState::new(users);
    api::create_router(state)
}
