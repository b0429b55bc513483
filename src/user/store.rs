//! In-memory user storage.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::models::User;

/// Records present in a freshly seeded store.
fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Khalil Triki".to_string(),
            email: "khalil@example.com".to_string(),
        },
        User {
            id: 2,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
    ]
}

/// Ordered in-memory collection of user records.
///
/// Ids come from a monotonic counter, so deleting a record never frees its id
/// for reuse.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    /// Create a store seeded with the default records.
    pub fn new() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store holding the given records.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|user| user.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            inner: Mutex::new(StoreInner { users, next_id }),
        }
    }

    /// List all records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Find a record by id.
    pub fn get(&self, id: u64) -> Option<User> {
        self.lock().users.iter().find(|user| user.id == id).cloned()
    }

    /// Append a new record under the next available id.
    pub fn create(&self, name: String, email: String) -> User {
        let mut inner = self.lock();
        let user = User {
            id: inner.next_id,
            name,
            email,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        user
    }

    /// Apply field updates to the record with the given id.
    ///
    /// Returns the updated record, or `None` if no record matches.
    pub fn update(&self, id: u64, name: Option<String>, email: Option<String>) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.iter_mut().find(|user| user.id == id)?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        Some(user.clone())
    }

    /// Remove the record with the given id. Returns whether a record was removed.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.lock();
        match inner.users.iter().position(|user| user.id == id) {
            Some(index) => {
                inner.users.remove(index);
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Every operation is a single atomic step, so the data stays
        // consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
