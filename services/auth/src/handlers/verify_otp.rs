use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use stepauth_auth_types::cookie::set_session_marker_cookie;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::verify::{VerifyInput, VerifyUseCase};

// ── POST /auth/verify-otp ─────────────────────────────────────────────────────

/// A code sent either as a JSON number or as a string of digits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OtpValue {
    Number(u64),
    Text(String),
}

impl OtpValue {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub login_session_id: String,
    pub otp: OtpValue,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::InvalidInput)?;

    let usecase = VerifyUseCase {
        sessions: state.session_store(),
        clock: state.clock(),
    };
    let marker = usecase
        .execute(VerifyInput {
            session_id: body.login_session_id,
            code: body.otp.into_string(),
        })
        .await?;

    let jar = set_session_marker_cookie(jar, marker, state.cookie_secure);
    Ok((
        StatusCode::OK,
        jar,
        Json(json!({ "message": "OTP verified successfully" })),
    ))
}
