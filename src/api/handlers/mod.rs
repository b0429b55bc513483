//! API request handlers.
//!
//! Handlers are organized by domain:
//! - `users`: User CRUD operations
//! - `misc`: Root service info and health checks

mod misc;
mod users;

pub use misc::{EndpointMap, HealthResponse, ServiceInfo, health, service_info};
pub use users::{
    DataResponse, MessageResponse, create_user, delete_user, get_user, list_users, update_user,
};
