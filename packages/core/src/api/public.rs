//! Read-only cross-store aggregates for the public dashboard.
//!
//! - `GET /public/stats`     - headline numbers across all three stores
//! - `GET /public/movements` - animal flows by country and purpose
//! - `GET /public/outbreaks` - outbreak distributions
//!
//! Every request recomputes from the live stores. Responses carry an ETag
//! so an unchanged aggregate costs a `304` instead of the full body.

use axum::{extract::State, http::HeaderMap, response::Response, routing::get, Router};

use super::headers::etag_json;
use super::AppState;
use crate::error::AppError;
use crate::stats::{MovementsSummary, OutbreaksSummary, PublicOverview};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/public/stats", get(public_stats))
        .route("/public/movements", get(public_movements))
        .route("/public/outbreaks", get(public_outbreaks))
}

/// Read guards are taken movements → outbreaks → vaccinations, the same
/// order everywhere more than one store is held.
pub async fn public_stats(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<Response, AppError> {
    let overview = {
        let movements = state.movements.read().await;
        let outbreaks = state.outbreaks.read().await;
        let vaccinations = state.vaccinations.read().await;
        PublicOverview::compute(movements.list(), outbreaks.list(), vaccinations.list())
    };
    etag_json(&request_headers, &overview)
}

pub async fn public_movements(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<Response, AppError> {
    let summary = MovementsSummary::compute(state.movements.read().await.list());
    etag_json(&request_headers, &summary)
}

pub async fn public_outbreaks(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<Response, AppError> {
    let summary = OutbreaksSummary::compute(state.outbreaks.read().await.list());
    etag_json(&request_headers, &summary)
}
