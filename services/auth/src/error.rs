use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service error variants. Messages are generic and safe to return to callers.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid input")]
    InvalidInput,
    #[error("invalid session")]
    SessionNotFound,
    #[error("session expired")]
    SessionExpired,
    #[error("invalid otp")]
    InvalidCode,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("invalid credential")]
    InvalidCredential,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::InvalidCode => "INVALID_CODE",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::SessionNotFound
            | Self::SessionExpired
            | Self::InvalidCode
            | Self::Unauthenticated
            | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        // Only 500s are logged here; TraceLayer already records status for every request.
        // The anyhow chain goes to the log, never into the body.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
