use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::send_code::{SendCodeInput, SendCodeUseCase};

#[derive(Deserialize)]
pub struct SendCodeRequest {
    // Optional so a missing field is this protocol's validation error, not
    // an axum deserialization rejection.
    pub email: Option<String>,
}

pub async fn send_code(
    State(state): State<AppState>,
    Json(body): Json<SendCodeRequest>,
) -> Result<Json<Value>, VerifyServiceError> {
    let usecase = SendCodeUseCase {
        mailer: state.mailer.clone(),
        clock: state.clock(),
        secret: state.otp_secret.clone(),
    };
    usecase.execute(SendCodeInput { email: body.email }).await?;
    Ok(Json(json!({ "success": true })))
}
