use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use backend::{InMemoryBackend, TradingBackend};
use configuration::Config;
use reports::DailyTradesReport;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub backend: Arc<dyn TradingBackend>,
    pub report: DailyTradesReport,
}

/// The application routes, with middleware, over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/reports/daily-trades", post(handlers::generate_daily_trades))
        .route("/api/reports/daily-trades/about", get(handlers::daily_trades_about))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// Loads the dataset named in the configuration and serves reports over it.
/// Tracing must already be initialised by the caller.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let backend = InMemoryBackend::from_path(&config.server.dataset_path)?;

    let state = Arc::new(AppState {
        backend: Arc::new(backend),
        report: DailyTradesReport::new(config.report),
    });

    let addr: SocketAddr = config.server.bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
