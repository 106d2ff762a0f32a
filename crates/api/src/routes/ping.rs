use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness acknowledgement payload.
#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// GET /ping -- fixed acknowledgement, cannot fail.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "Pong!" })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
