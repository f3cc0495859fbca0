//! Vaccination routes.
//!
//! - `GET    /vaccinations[?region][?campaign][?vaccinatorId]`
//! - `GET    /vaccinations/stats`  - totals over the whole store
//! - `GET    /vaccinations/:id`
//! - `POST   /vaccinations`        - 400 when the counts do not add up
//! - `PUT    /vaccinations/:id`    - same check as POST
//! - `DELETE /vaccinations/:id`

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{records, AppState, VACCINATIONS};
use crate::error::AppError;
use crate::filters::{RecordFilter, VaccinationFilter};
use crate::models::Vaccination;
use crate::stats::VaccinationStats;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vaccinations", get(list_vaccinations).post(create_vaccination))
        .route("/vaccinations/stats", get(vaccination_stats))
        .route(
            "/vaccinations/:id",
            get(get_vaccination)
                .put(update_vaccination)
                .delete(delete_vaccination),
        )
}

pub async fn list_vaccinations(
    State(state): State<AppState>,
    Query(filter): Query<VaccinationFilter>,
) -> Json<Vec<Vaccination>> {
    let store = state.vaccinations.read().await;
    Json(filter.apply(store.list()))
}

/// Ignores any filter; always computed over every stored record.
pub async fn vaccination_stats(State(state): State<AppState>) -> Json<VaccinationStats> {
    let store = state.vaccinations.read().await;
    Json(VaccinationStats::compute(store.list()))
}

pub async fn get_vaccination(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vaccination>, AppError> {
    records::fetch(&state.vaccinations, id).await
}

pub async fn create_vaccination(
    State(state): State<AppState>,
    Json(body): Json<Vaccination>,
) -> Result<Json<Vaccination>, AppError> {
    records::create(&state.vaccinations, &state.metrics, VACCINATIONS, body).await
}

pub async fn update_vaccination(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Vaccination>,
) -> Result<Json<Vaccination>, AppError> {
    records::replace(&state.vaccinations, &state.metrics, VACCINATIONS, id, body).await
}

pub async fn delete_vaccination(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vaccination>, AppError> {
    records::remove(&state.vaccinations, &state.metrics, VACCINATIONS, id).await
}
