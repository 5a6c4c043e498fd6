use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check. Readiness is wired per
/// service, since what "ready" means depends on the service's collaborators.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
