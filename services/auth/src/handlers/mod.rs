pub mod login;
pub mod protected;
pub mod token;
pub mod verify_otp;

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /`.
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Authentication Flow API Running" }))
}
