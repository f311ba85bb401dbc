use stepauth_auth_types::token::{ACCESS_TOKEN_TTL_SECS, sign_access_token};
use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::repository::LoginSessionStore;
use crate::error::AuthServiceError;

#[derive(Debug)]
pub struct IssueTokenOutput {
    pub access_token: String,
    pub expires_in: u64,
}

/// Exchange a session marker for a signed access credential.
///
/// Only the existence of the login session is checked. Neither its expiry nor
/// whether its code was ever redeemed is consulted here; a session that was
/// created but never verified can still mint credentials while it is stored.
pub struct IssueTokenUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub sessions: S,
    pub clock: C,
    pub jwt_secret: String,
}

impl<S, C> IssueTokenUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub async fn execute(
        &self,
        session_marker: Option<String>,
    ) -> Result<IssueTokenOutput, AuthServiceError> {
        let marker = session_marker
            .filter(|m| !m.trim().is_empty())
            .ok_or(AuthServiceError::Unauthenticated)?;

        let session = self
            .sessions
            .get(&marker)
            .await?
            .ok_or(AuthServiceError::SessionNotFound)?;

        let (access_token, _claims) = sign_access_token(
            &session.email,
            &session.session_id,
            self.clock.now_secs(),
            &self.jwt_secret,
        )
        .map_err(|e| AuthServiceError::Internal(e.into()))?;

        info!(session_id = %session.session_id, "access token issued");

        Ok(IssueTokenOutput {
            access_token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        })
    }
}
