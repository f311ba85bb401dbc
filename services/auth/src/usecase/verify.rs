use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::repository::LoginSessionStore;
use crate::domain::types::CodeCheck;
use crate::error::AuthServiceError;

pub struct VerifyInput {
    pub session_id: String,
    /// Code as presented by the caller; must be a decimal integer.
    pub code: String,
}

/// Redeem a one-time code. On success returns the session marker.
pub struct VerifyUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub sessions: S,
    pub clock: C,
}

impl<S, C> VerifyUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub async fn execute(&self, input: VerifyInput) -> Result<String, AuthServiceError> {
        let session_id = input.session_id.trim();
        let code = input.code.trim();
        if session_id.is_empty() || code.is_empty() {
            return Err(AuthServiceError::InvalidInput);
        }

        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AuthServiceError::SessionNotFound)?;

        // Lazy expiry: the first touch after expiry removes the session and its code.
        if session.is_expired(self.clock.now()) {
            self.sessions.delete(session_id).await?;
            info!(session_id, "expired login session removed");
            return Err(AuthServiceError::SessionExpired);
        }

        let presented: u32 = code.parse().map_err(|_| AuthServiceError::InvalidCode)?;

        match self.sessions.consume_code(session_id, presented).await? {
            CodeCheck::Consumed => {
                info!(session_id, "one-time code verified");
                // The session stays in the store; the token step still reads it.
                Ok(session.session_id)
            }
            CodeCheck::Mismatch | CodeCheck::Missing => Err(AuthServiceError::InvalidCode),
        }
    }
}
