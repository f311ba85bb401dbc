use axum::{
    Router,
    routing::{get, post},
};

use stepauth_core::error::not_found;
use stepauth_core::health::{healthz, readyz};
use stepauth_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    index, login::login, protected::protected, token::create_token, verify_otp::verify_otp,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Handshake
        .route("/auth/login", post(login))
        .route("/auth/verify-otp", post(verify_otp))
        .route("/auth/token", post(create_token))
        // Protected resource
        .route("/protected", get(protected))
        .fallback(not_found)
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
