//! Minimal user records. Nothing job-facing depends on them yet.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

pub trait UserStore: Send + Sync {
    /// Creates a new user with a fresh id.
    fn create_user(&self, new_user: NewUser) -> User;

    /// Returns None if the user does not exist.
    fn get_user(&self, id: &str) -> Option<User>;

    /// Returns None if no user has this exact username.
    fn get_user_by_username(&self, username: &str) -> Option<User>;
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> InMemoryUserStore {
        InMemoryUserStore::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn create_user(&self, new_user: NewUser) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new_user.username,
            password: new_user.password,
        };
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id.clone(), user.clone());
        user
    }

    fn get_user(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|user| user.username == username)
            .cloned()
    }
}
