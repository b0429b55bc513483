//! User service for business logic.

use tracing::{info, instrument, warn};

use super::error::UserError;
use super::models::{CreateUserRequest, UpdateUserRequest, User};
use super::store::UserStore;

/// Service for user management operations.
#[derive(Debug)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    /// Create a new user service over the given store.
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// List all users in storage order.
    #[instrument(skip(self))]
    pub fn list_users(&self) -> Vec<User> {
        self.store.list()
    }

    /// Get a user by id.
    #[instrument(skip(self))]
    pub fn get_user(&self, id: u64) -> Result<User, UserError> {
        self.store.get(id).ok_or(UserError::NotFound)
    }

    /// Create a new user with validation.
    #[instrument(skip(self, request))]
    pub fn create_user(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let name = present(request.name);
        let email = present(request.email);
        let (Some(name), Some(email)) = (name, email) else {
            warn!("Rejected user creation with missing fields");
            return Err(UserError::validation("Name and email are required"));
        };

        let user = self.store.create(name, email);
        info!(user_id = user.id, "Created new user");
        Ok(user)
    }

    /// Update an existing user. Absent fields are left unchanged.
    #[instrument(skip(self, request))]
    pub fn update_user(&self, id: u64, request: UpdateUserRequest) -> Result<User, UserError> {
        if self.store.get(id).is_none() {
            return Err(UserError::NotFound);
        }

        if let Some(ref name) = request.name
            && name.trim().is_empty()
        {
            warn!(user_id = id, "Rejected update with empty name");
            return Err(UserError::validation("Name cannot be empty"));
        }
        if let Some(ref email) = request.email
            && email.trim().is_empty()
        {
            warn!(user_id = id, "Rejected update with empty email");
            return Err(UserError::validation("Email cannot be empty"));
        }

        let user = self
            .store
            .update(id, request.name, request.email)
            .ok_or(UserError::NotFound)?;
        info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    /// Delete a user by id.
    #[instrument(skip(self))]
    pub fn delete_user(&self, id: u64) -> Result<(), UserError> {
        if !self.store.delete(id) {
            return Err(UserError::NotFound);
        }
        info!(user_id = id, "Deleted user");
        Ok(())
    }
}

/// Collapse empty or whitespace-only input to an absent field.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
