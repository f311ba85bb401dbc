use stepauth_auth_types::token::{AccessClaims, validate_access_token};

use crate::error::AuthServiceError;

/// Admit a request carrying a valid access credential.
///
/// Stateless: only the signature and `exp` are checked, never the session store.
pub fn authorize(credential: Option<&str>, secret: &str) -> Result<AccessClaims, AuthServiceError> {
    let token = credential
        .filter(|t| !t.is_empty())
        .ok_or(AuthServiceError::Unauthenticated)?;
    validate_access_token(token, secret).map_err(|_| AuthServiceError::InvalidCredential)
}
