//! User state: saved creators and follows.
//!
//! Features around the influence network (saved lists, follow graphs,
//! achievements) read and update user state through [`UserRepository`].
//! Every update is a single atomic operation on the repository; callers
//! never hold the underlying collections. The analysis engine has no access
//! to this module.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ErrorCode;

/// A reader's profile as seen by the social features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub joined_at: DateTime<Utc>,
    /// Creator IDs saved by this user, in the order they were saved.
    #[serde(default)]
    pub saved_creators: Vec<String>,
    /// User or creator IDs this user follows, in follow order.
    #[serde(default)]
    pub following: Vec<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: id.into(),
            display_name: username.clone(),
            username,
            joined_at: Utc::now(),
            saved_creators: Vec::new(),
            following: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_saved(&self, creator_id: &str) -> bool {
        self.saved_creators.iter().any(|id| id == creator_id)
    }

    #[must_use]
    pub fn follows(&self, target_id: &str) -> bool {
        self.following.iter().any(|id| id == target_id)
    }
}

/// Errors returned by [`UserRepository`] updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("user repository lock poisoned")]
    Poisoned,
}

impl RepositoryError {
    /// Machine-readable code for error rendering.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound(_) => ErrorCode::UserNotFound,
            Self::Poisoned => ErrorCode::InternalUnexpected,
        }
    }
}

/// Atomic read/update access to user state.
pub trait UserRepository: Send + Sync {
    /// Snapshot of a user's profile.
    fn get_user(&self, user_id: &str) -> Option<UserProfile>;

    /// Save or unsave a creator. Returns the new saved state.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UserNotFound`] for an unknown user.
    fn toggle_saved(&self, user_id: &str, creator_id: &str) -> Result<bool, RepositoryError>;

    /// Follow or unfollow a user or creator. Returns the new follow state.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UserNotFound`] for an unknown user.
    fn toggle_followed(&self, user_id: &str, target_id: &str) -> Result<bool, RepositoryError>;
}

/// In-memory [`UserRepository`] guarded by a single lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository seeded with `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = UserProfile>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Insert or replace a user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Poisoned`] if a writer panicked.
    pub fn insert(&self, user: UserProfile) -> Result<(), RepositoryError> {
        let mut users = self.users.write().map_err(|_| RepositoryError::Poisoned)?;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn toggle_in<F>(&self, user_id: &str, value: &str, field: F) -> Result<bool, RepositoryError>
    where
        F: FnOnce(&mut UserProfile) -> &mut Vec<String>,
    {
        let mut users = self.users.write().map_err(|_| RepositoryError::Poisoned)?;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| RepositoryError::UserNotFound(user_id.to_string()))?;
        let list = field(user);

        if let Some(pos) = list.iter().position(|id| id == value) {
            list.remove(pos);
            Ok(false)
        } else {
            list.push(value.to_string());
            Ok(true)
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_user(&self, user_id: &str) -> Option<UserProfile> {
        self.users.read().ok()?.get(user_id).cloned()
    }

    fn toggle_saved(&self, user_id: &str, creator_id: &str) -> Result<bool, RepositoryError> {
        let saved = self.toggle_in(user_id, creator_id, |u| &mut u.saved_creators)?;
        debug!(user_id, creator_id, saved, "toggled saved creator");
        Ok(saved)
    }

    fn toggle_followed(&self, user_id: &str, target_id: &str) -> Result<bool, RepositoryError> {
        let following = self.toggle_in(user_id, target_id, |u| &mut u.following)?;
        debug!(user_id, target_id, following, "toggled follow");
        Ok(following)
    }
}
