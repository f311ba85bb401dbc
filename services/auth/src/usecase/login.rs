use tracing::{debug, info};

use crate::domain::clock::Clock;
use crate::domain::repository::LoginSessionStore;
use crate::domain::types::{LoginSession, OneTimeCode};
use crate::error::AuthServiceError;
use crate::usecase::codegen::{new_one_time_code, new_session_id};

pub struct LoginInput {
    pub email: String,
    /// Any non-empty value is accepted; credentials are not checked.
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub session_id: String,
    pub code: u32,
}

/// Open a login session and issue its one-time code.
pub struct LoginUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub sessions: S,
    pub clock: C,
}

impl<S, C> LoginUseCase<S, C>
where
    S: LoginSessionStore,
    C: Clock,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AuthServiceError> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthServiceError::InvalidInput);
        }

        let session = LoginSession::new(new_session_id(), input.email, self.clock.now());
        let code = new_one_time_code();

        self.sessions
            .put(&session, OneTimeCode { value: code })
            .await?;

        info!(session_id = %session.session_id, email = %session.email, "login session created");
        debug!(session_id = %session.session_id, otp = code, "one-time code issued");

        Ok(LoginOutput {
            session_id: session.session_id,
            code,
        })
    }
}
