use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use chrono::FixedOffset;
use configuration::Config;
use database::HistoryStore;
use engine::CalcEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub engine: CalcEngine,
    pub display_offset: FixedOffset,
}

/// Builds the application router over the given state. Separate from
/// `run_server` so tests can drive the same routes against an in-memory
/// store.
pub fn app(state: Arc<AppState>) -> Router {
    // The original service sat behind a permissive CORS policy; keep it.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/calculadora/sum", post(handlers::post_sum))
        .route("/calculadora/resta", post(handlers::post_subtract))
        .route("/calculadora/mult", post(handlers::post_multiply))
        .route("/calculadora/div", post(handlers::post_divide))
        .route(
            "/calculadora/operacionMultiple",
            post(handlers::post_multiple_operations),
        )
        .route("/calculadora/historial", get(handlers::get_history))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// The main function to configure and run the web server against an
/// injected history store.
pub async fn run_server(
    addr: SocketAddr,
    config: &Config,
    store: Arc<dyn HistoryStore>,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        engine: CalcEngine::new(store),
        display_offset: config.history.display_offset(),
    });
    let app = app(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
