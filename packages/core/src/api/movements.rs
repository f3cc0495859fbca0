//! Movement routes.
//!
//! - `GET    /movements[?type][?country][?hasAlert]`
//! - `GET    /movements/:id`
//! - `POST   /movements`      - 400 when the document number is taken
//! - `PUT    /movements/:id`
//! - `DELETE /movements/:id`

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{records, AppState, MOVEMENTS};
use crate::error::AppError;
use crate::filters::{MovementFilter, RecordFilter};
use crate::models::Movement;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movements", get(list_movements).post(create_movement))
        .route(
            "/movements/:id",
            get(get_movement).put(update_movement).delete(delete_movement),
        )
}

pub async fn list_movements(
    State(state): State<AppState>,
    Query(filter): Query<MovementFilter>,
) -> Json<Vec<Movement>> {
    let store = state.movements.read().await;
    Json(filter.apply(store.list()))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Movement>, AppError> {
    records::fetch(&state.movements, id).await
}

pub async fn create_movement(
    State(state): State<AppState>,
    Json(body): Json<Movement>,
) -> Result<Json<Movement>, AppError> {
    records::create(&state.movements, &state.metrics, MOVEMENTS, body).await
}

pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Movement>,
) -> Result<Json<Movement>, AppError> {
    records::replace(&state.movements, &state.metrics, MOVEMENTS, id, body).await
}

pub async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Movement>, AppError> {
    records::remove(&state.movements, &state.metrics, MOVEMENTS, id).await
}
