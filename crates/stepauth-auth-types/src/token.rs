//! Access-credential (JWT) signing and validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

/// Access-credential lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 900;

/// Errors returned by [`validate_access_token`] and [`sign_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims carried by an access credential.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `email` | `email` | identity the credential was minted for |
/// | `session_id` | `sessionId` | login session the credential came from |
/// | `iat` | `iat` | issue time, seconds since epoch |
/// | `exp` | `exp` | `iat` + [`ACCESS_TOKEN_TTL_SECS`] |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub email: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub iat: u64,
    pub exp: u64,
}

/// HS256, `exp` required and checked with zero leeway.
fn validation() -> Validation {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);
    validation
}

/// Validate a presented access credential and return its claims.
///
/// Any tampering with header, payload or signature fails; so does a credential
/// whose `exp` lies in the past.
pub fn validate_access_token(token: &str, secret: &str) -> Result<AccessClaims, AuthError> {
    let data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Mint an access credential for `email`, issued at `issued_at` (seconds since epoch).
///
/// Requires the `USE_ONLY_IN_AUTH_SERVICE` feature: the auth service is the sole issuer.
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn sign_access_token(
    email: &str,
    session_id: &str,
    issued_at: u64,
    secret: &str,
) -> Result<(String, AccessClaims), AuthError> {
    let claims = AccessClaims {
        email: email.to_owned(),
        session_id: session_id.to_owned(),
        iat: issued_at,
        exp: issued_at + ACCESS_TOKEN_TTL_SECS,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)?;
    Ok((token, claims))
}
