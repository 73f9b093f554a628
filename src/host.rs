//! Host bot collaborators — implemented by the embedding application.

use serde::{Deserialize, Serialize};

/// A user the host client currently holds in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedUser {
    pub id: String,
    pub avatar_url: String,
}

/// The host client's user cache.
pub trait UserDirectory {
    /// Snapshot of the currently cached users.
    fn cached_users(&self) -> Vec<CachedUser>;
}

impl UserDirectory for Vec<CachedUser> {
    fn cached_users(&self) -> Vec<CachedUser> {
        self.clone()
    }
}

/// The bot's own account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BotIdentity {
    pub avatar_url: String,
}

impl BotIdentity {
    pub fn new(avatar_url: impl Into<String>) -> Self {
        Self {
            avatar_url: avatar_url.into(),
        }
    }
}
