use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Verification service error variants.
///
/// `CodeMismatch` is kept distinct from the validation variants internally,
/// but maps to the identical status and body shape on the wire so a response
/// carries no oracle about which check failed.
#[derive(Debug, thiserror::Error)]
pub enum VerifyServiceError {
    #[error("a valid email address is required")]
    InvalidEmail,
    #[error("invalid code format")]
    InvalidCode,
    #[error("invalid code")]
    CodeMismatch,
    #[error("email service not configured")]
    Configuration,
    #[error("failed to send verification email")]
    Transport(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl VerifyServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidCode => "INVALID_CODE",
            Self::CodeMismatch => "CODE_MISMATCH",
            Self::Configuration => "CONFIGURATION",
            Self::Transport(_) => "TRANSPORT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for VerifyServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidEmail | Self::InvalidCode | Self::CodeMismatch => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Transport(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Log 500 chains only — tower-http TraceLayer already records
        // method/uri/status for every request, and 4xx are expected client
        // outcomes. Codes, raw addresses, and the secret never reach the log
        // stream at any level.
        match &self {
            Self::Transport(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "request failed");
            }
            Self::Configuration => {
                tracing::error!(kind = self.kind(), "derivation secret or mail credential unset");
            }
            _ => {}
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
