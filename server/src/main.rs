//! Taskboard host server: SSR shell + `/api` reverse proxy.
//!
//! All business logic lives in the external task store, chat service, and
//! session provider; this binary only renders the Leptos app and forwards
//! `/api` traffic to those upstreams.
#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    tracing::info!(
        task_store = %config.task_store_url,
        chat_service = %config.chat_service_url,
        auth_service = %config.auth_service_url,
        "upstreams configured"
    );

    let port = config.port;
    let state = state::AppState::new(config).expect("http client init failed");

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "taskboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
