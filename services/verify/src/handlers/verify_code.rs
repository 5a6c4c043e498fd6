use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::verify_code::{VerifyCodeInput, VerifyCodeUseCase};

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: Option<String>,
    pub code: Option<String>,
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<Json<Value>, VerifyServiceError> {
    let usecase = VerifyCodeUseCase {
        clock: state.clock(),
        secret: state.otp_secret.clone(),
    };
    usecase.execute(VerifyCodeInput {
        email: body.email,
        code: body.code,
    })?;
    Ok(Json(json!({ "success": true })))
}
