use tracing::info;

use malasosta_core::tracing::init_tracing;

use malasosta_verify::config::VerifyConfig;
use malasosta_verify::router::build_router;
use malasosta_verify::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = VerifyConfig::from_env();
    let state = AppState::from_config(&config);

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.verify_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("verify service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
