//! HTTP surface.
//!
//! [`create_router`] assembles every route group around one [`AppState`].
//! Entity and public routes are nested under the configured API prefix;
//! `/`, `/health` and `/metrics` stay at the server root.

pub mod headers;
pub mod health;
pub mod movements;
pub mod outbreaks;
pub mod public;
pub mod records;
pub mod root;
pub mod vaccinations;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::Response,
    routing::get,
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::metrics::{track_http, AppMetrics};
use crate::models::{Movement, Outbreak, Vaccination};
use crate::seed;
use crate::store::RecordStore;

/// A store shared between handler tasks.
pub type SharedStore<T> = Arc<RwLock<RecordStore<T>>>;

pub const MOVEMENTS: &str = "movements";
pub const OUTBREAKS: &str = "outbreaks";
pub const VACCINATIONS: &str = "vaccinations";

/// Everything the handlers need, constructed once per process (or per test).
#[derive(Clone)]
pub struct AppState {
    pub movements: SharedStore<Movement>,
    pub outbreaks: SharedStore<Outbreak>,
    pub vaccinations: SharedStore<Vaccination>,
    pub metrics: Arc<AppMetrics>,
}

impl AppState {
    pub fn from_records(
        movements: Vec<Movement>,
        outbreaks: Vec<Outbreak>,
        vaccinations: Vec<Vaccination>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        metrics.set_records(MOVEMENTS, movements.len());
        metrics.set_records(OUTBREAKS, outbreaks.len());
        metrics.set_records(VACCINATIONS, vaccinations.len());

        Self {
            movements: Arc::new(RwLock::new(RecordStore::with_records(movements))),
            outbreaks: Arc::new(RwLock::new(RecordStore::with_records(outbreaks))),
            vaccinations: Arc::new(RwLock::new(RecordStore::with_records(vaccinations))),
            metrics,
        }
    }

    /// Stores loaded with the sample records.
    pub fn seeded(metrics: Arc<AppMetrics>) -> Self {
        Self::from_records(
            seed::movements(),
            seed::outbreaks(),
            seed::vaccinations(),
            metrics,
        )
    }

    /// Empty stores.
    pub fn empty(metrics: Arc<AppMetrics>) -> Self {
        Self::from_records(Vec::new(), Vec::new(), Vec::new(), metrics)
    }
}

/// Build the complete application router.
///
/// `api_prefix` is either empty or a path starting with `/` without a
/// trailing slash (see `Config`).
pub fn create_router(state: AppState, api_prefix: &str) -> Router {
    let api = Router::new()
        .merge(movements::routes())
        .merge(outbreaks::routes())
        .merge(vaccinations::routes())
        .merge(public::routes());

    let api = if api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(api_prefix, api)
    };

    let welcome = root::welcome_payload(api_prefix);

    Router::new()
        .route(
            "/",
            get(move || {
                let body = welcome.clone();
                async move { Json(body) }
            }),
        )
        .route("/health", get(health::health))
        .route("/metrics", get(render_metrics))
        .merge(api)
        .layer(middleware::from_fn_with_state(state.metrics.clone(), track_http))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /metrics` - Prometheus text exposition.
async fn render_metrics(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state
        .metrics
        .render()
        .map_err(|err| AppError::Internal(format!("Failed to render metrics: {}", err)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(Body::from(body))
        .map_err(|err| AppError::Internal(err.to_string()))
}
