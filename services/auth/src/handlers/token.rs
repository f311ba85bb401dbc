use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use stepauth_auth_types::{cookie::set_access_token_cookie, credential::bearer_token};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::token::IssueTokenUseCase;

// ── POST /auth/token ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Exchange `Authorization: Bearer <session marker>` for an access credential.
pub async fn create_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = IssueTokenUseCase {
        sessions: state.session_store(),
        clock: state.clock(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(bearer_token(&headers)).await?;

    let jar = set_access_token_cookie(
        jar,
        out.access_token.clone(),
        out.expires_in,
        state.cookie_secure,
    );
    Ok((
        jar,
        Json(TokenResponse {
            access_token: out.access_token,
            expires_in: out.expires_in,
        }),
    ))
}
