//! Outbreak routes.
//!
//! - `GET    /outbreaks[?status][?diseaseType][?region]`
//! - `GET    /outbreaks/active`
//! - `GET    /outbreaks/:id`
//! - `POST   /outbreaks`
//! - `PUT    /outbreaks/:id`
//! - `DELETE /outbreaks/:id`
//!
//! `/outbreaks/active` is a static segment, which the router always
//! prefers over the `:id` capture.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{records, AppState, OUTBREAKS};
use crate::error::AppError;
use crate::filters::{OutbreakFilter, RecordFilter};
use crate::models::Outbreak;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/outbreaks", get(list_outbreaks).post(create_outbreak))
        .route("/outbreaks/active", get(list_active_outbreaks))
        .route(
            "/outbreaks/:id",
            get(get_outbreak).put(update_outbreak).delete(delete_outbreak),
        )
}

pub async fn list_outbreaks(
    State(state): State<AppState>,
    Query(filter): Query<OutbreakFilter>,
) -> Json<Vec<Outbreak>> {
    let store = state.outbreaks.read().await;
    Json(filter.apply(store.list()))
}

pub async fn list_active_outbreaks(State(state): State<AppState>) -> Json<Vec<Outbreak>> {
    let store = state.outbreaks.read().await;
    Json(OutbreakFilter::active().apply(store.list()))
}

pub async fn get_outbreak(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Outbreak>, AppError> {
    records::fetch(&state.outbreaks, id).await
}

pub async fn create_outbreak(
    State(state): State<AppState>,
    Json(body): Json<Outbreak>,
) -> Result<Json<Outbreak>, AppError> {
    records::create(&state.outbreaks, &state.metrics, OUTBREAKS, body).await
}

pub async fn update_outbreak(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Outbreak>,
) -> Result<Json<Outbreak>, AppError> {
    records::replace(&state.outbreaks, &state.metrics, OUTBREAKS, id, body).await
}

pub async fn delete_outbreak(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Outbreak>, AppError> {
    records::remove(&state.outbreaks, &state.metrics, OUTBREAKS, id).await
}
