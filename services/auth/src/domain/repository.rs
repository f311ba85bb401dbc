#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{CodeCheck, LoginSession, OneTimeCode};
use crate::error::AuthServiceError;

/// Pending login sessions and the one-time codes paired with them.
///
/// Both mappings live behind one trait so an implementation can update them
/// as a unit: a reader must never see a session without its code between
/// `put` and the first successful `consume_code`.
pub trait LoginSessionStore: Send + Sync {
    /// Insert a session together with its code.
    async fn put(&self, session: &LoginSession, code: OneTimeCode)
    -> Result<(), AuthServiceError>;

    async fn get(&self, session_id: &str) -> Result<Option<LoginSession>, AuthServiceError>;

    async fn get_code(&self, session_id: &str) -> Result<Option<OneTimeCode>, AuthServiceError>;

    /// Remove the code if it equals `presented`. Compare and delete are one step,
    /// so concurrent callers cannot both consume the same code.
    async fn consume_code(
        &self,
        session_id: &str,
        presented: u32,
    ) -> Result<CodeCheck, AuthServiceError>;

    /// Remove a session and its code, if any.
    async fn delete(&self, session_id: &str) -> Result<(), AuthServiceError>;

    /// Remove every session expired at `now`, with its code. Returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AuthServiceError>;
}
