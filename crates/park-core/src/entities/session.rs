//! Session entity - the persisted link between a user and their current refresh token

use chrono::{DateTime, Utc};

/// Session record
///
/// At most one session exists per user; the store keys rows by `user_id`.
/// A refresh token is only valid while it matches the stored value here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether a presented token matches this session
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.refresh_token == token
    }
}
