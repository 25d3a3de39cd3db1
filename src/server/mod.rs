pub mod api;

use crate::error::AppError;
use crate::services::PriceStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PriceStore>,

    /// Serializes the POST path (load, duplicate check, append) so two
    /// concurrent writers cannot both pass the check against a stale read.
    /// GET takes no lock; reads may interleave freely with an append.
    pub append_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: PriceStore) -> Self {
        Self {
            store: Arc::new(store),
            append_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InputShape(_) | AppError::BadYear | AppError::EmptyResult => {
                StatusCode::BAD_REQUEST
            }
            AppError::Duplicate => StatusCode::CONFLICT,
            AppError::StoreCorrupt(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route(
            "/nifty/stocks/{symbol}",
            get(api::get_prices_handler).post(api::post_prices_handler),
        )
        .route("/health", get(api::health_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the axum server
pub async fn serve(store: PriceStore, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting priceboard server");
    tracing::info!("Using price data file: {}", store.path().display());

    tracing::info!("Registering routes:");
    tracing::info!("  GET  /nifty/stocks/{{symbol}}?year=YYYY");
    tracing::info!("  POST /nifty/stocks/{{symbol}}");
    tracing::info!("  GET  /health");

    let app = router(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
