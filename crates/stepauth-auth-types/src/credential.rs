//! Extraction of presented bearer values from request headers and cookies.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::cookie::ACCESS_TOKEN_COOKIE;

const BEARER_PREFIX: &str = "Bearer ";

/// Value of an `Authorization: Bearer <value>` header.
///
/// Returns `None` when the header is absent, not UTF-8, uses another scheme,
/// or carries an empty value.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then(|| token.to_owned())
}

/// Access credential presented by the caller, if any.
///
/// Looks at `Authorization: Bearer` first, then the `access_token` cookie.
/// Extraction never fails: absence is `None` and is judged by the guard.
#[derive(Debug, Clone, Default)]
pub struct PresentedCredential(pub Option<String>);

impl<S> FromRequestParts<S> for PresentedCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // Values are read synchronously and moved into a 'static future so the
    // returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers).or_else(|| {
            CookieJar::from_headers(&parts.headers)
                .get(ACCESS_TOKEN_COOKIE)
                .map(|c| c.value().to_owned())
                .filter(|v| !v.is_empty())
        });

        async move { Ok(Self(token)) }
    }
}
