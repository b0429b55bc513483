//! User management module.
//!
//! Holds the in-memory user collection and the CRUD operations over it.

mod error;
mod models;
mod service;
mod store;

pub use error::UserError;
pub use models::{CreateUserRequest, UpdateUserRequest, User};
pub use service::UserService;
pub use store::UserStore;
