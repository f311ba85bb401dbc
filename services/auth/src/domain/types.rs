use chrono::{DateTime, Duration, Utc};

/// One in-flight or completed login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// Opaque lookup key, later handed back to the caller as the session marker.
    pub session_id: String,
    /// Identity the session belongs to.
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LoginSession {
    pub fn new(session_id: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            email,
            created_at: now,
            expires_at: now + Duration::seconds(LOGIN_SESSION_TTL_SECS),
        }
    }

    /// True once `now` is strictly past `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// The one-time code issued for a login session. Present only until redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneTimeCode {
    pub value: u32,
}

/// Outcome of an atomic compare-and-delete on a stored code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    /// Code matched and has been removed.
    Consumed,
    /// Code did not match; stored code is untouched.
    Mismatch,
    /// No code stored for the session.
    Missing,
}

/// Login session time-to-live in seconds.
pub const LOGIN_SESSION_TTL_SECS: i64 = 120;

/// Inclusive bounds of a one-time code.
pub const ONE_TIME_CODE_MIN: u32 = 100_000;
pub const ONE_TIME_CODE_MAX: u32 = 999_999;

/// Session identifier length in characters.
pub const SESSION_ID_LEN: usize = 16;
