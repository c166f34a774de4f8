use std::sync::Arc;

use taskbox_server::{
    app_state::AppState, data_access::data_context::DataContext, map_routes, settings::Settings,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // ── Logging ────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskbox_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── Settings & store ───────────────────────────────────────
    let settings = Settings::load();
    let data_context = DataContext::new(&settings.database_path)
        .expect("Failed to open task database");
    info!("Task store ready at {}", settings.database_path);

    // ── Shared state ───────────────────────────────────────────
    let state = Arc::new(AppState {
        store: Arc::new(data_context),
    });

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    let addr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    );
    info!("Server running on http://{}", addr);
    info!("  Tasks: http://{}/tasks", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
