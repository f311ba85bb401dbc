use axum::{Json, extract::State};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;

use stepauth_auth_types::{credential::PresentedCredential, token::AccessClaims};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::protected::authorize;

// ── GET /protected ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub user: AccessClaims,
    pub success_flag: String,
}

/// `FLAG-` followed by base64 of `<email>_COMPLETED_ASSIGNMENT`.
pub fn completion_flag(email: &str) -> String {
    format!("FLAG-{}", STANDARD.encode(format!("{email}_COMPLETED_ASSIGNMENT")))
}

pub async fn protected(
    State(state): State<AppState>,
    PresentedCredential(credential): PresentedCredential,
) -> Result<Json<ProtectedResponse>, AuthServiceError> {
    let user = authorize(credential.as_deref(), &state.jwt_secret)?;
    let success_flag = completion_flag(&user.email);

    Ok(Json(ProtectedResponse {
        message: "Access granted",
        user,
        success_flag,
    }))
}
