//! HTTP API module.
//!
//! Maps REST endpoints onto the user service and shapes the JSON envelopes.

mod error;
pub mod handlers;
mod routes;
mod state;

// Re-export error types for external use
#[allow(unused_imports)]
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{create_router, create_router_with_config};
pub use state::AppState;
