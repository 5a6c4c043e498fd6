use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Handler for `GET /readyz`. The process only boots with a non-blank secret
/// and mail credential, so this reflects the wired state rather than
/// re-reading the environment.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    if state.otp_secret.is_empty() || !state.mailer.is_configured() {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    StatusCode::OK
}
