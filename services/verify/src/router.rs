use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use malasosta_core::health::healthz;
use malasosta_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{health::readyz, send_code::send_code, verify_code::verify_code};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Preflight contract: any origin, plus the headers browser clients
    // attach to these calls. The header allowlist is part of the wire
    // contract, not an implementation detail.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Verification protocol
        .route("/send-code", post(send_code))
        .route("/verify-code", post(verify_code))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
