//! Shared test utilities — message builder, counting user directory.
//!
//! Available only under `#[cfg(test)]`.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::host::{CachedUser, UserDirectory};
use crate::message::ThreadMessage;

// ============================================================================
// ThreadMessageBuilder
// ============================================================================

pub struct ThreadMessageBuilder {
    msg: ThreadMessage,
}

impl ThreadMessageBuilder {
    pub fn new() -> Self {
        Self {
            msg: ThreadMessage {
                body: "Test message".to_string(),
                user_id: "100".to_string(),
                user_name: "Alice".to_string(),
                role_name: None,
                is_anonymous: false,
                attachments: vec![],
                message_number: 1,
            },
        }
    }

    pub fn body(mut self, b: &str) -> Self {
        self.msg.body = b.to_string();
        self
    }

    pub fn user(mut self, id: &str, name: &str) -> Self {
        self.msg.user_id = id.to_string();
        self.msg.user_name = name.to_string();
        self
    }

    pub fn role(mut self, r: &str) -> Self {
        self.msg.role_name = Some(r.to_string());
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.msg.is_anonymous = true;
        self
    }

    pub fn attachments(mut self, urls: &[&str]) -> Self {
        self.msg.attachments = urls.iter().map(|u| u.to_string()).collect();
        self
    }

    pub fn number(mut self, n: u64) -> Self {
        self.msg.message_number = n;
        self
    }

    pub fn build(self) -> ThreadMessage {
        self.msg
    }
}

// ============================================================================
// StaticDirectory
// ============================================================================

/// Fixed user list that counts how many times it was scanned.
pub struct StaticDirectory {
    users: Vec<CachedUser>,
    scans: AtomicUsize,
}

impl StaticDirectory {
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        Self {
            users: users
                .iter()
                .map(|(id, url)| CachedUser {
                    id: id.to_string(),
                    avatar_url: url.to_string(),
                })
                .collect(),
            scans: AtomicUsize::new(0),
        }
    }

    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

impl UserDirectory for StaticDirectory {
    fn cached_users(&self) -> Vec<CachedUser> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.users.clone()
    }
}
