//! CRUD plumbing shared by the three entity route groups.
//!
//! Each helper takes the write (or read) guard for exactly one store
//! operation, keeps the `records_stored` gauge in step, and logs and
//! counts rejected writes.

use axum::Json;
use serde::Serialize;

use super::SharedStore;
use crate::error::AppError;
use crate::metrics::AppMetrics;
use crate::store::{Record, StoreError};

pub async fn fetch<T>(store: &SharedStore<T>, id: u64) -> Result<Json<T>, AppError>
where
    T: Record + Serialize,
{
    let store = store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

pub async fn create<T>(
    store: &SharedStore<T>,
    metrics: &AppMetrics,
    entity: &str,
    record: T,
) -> Result<Json<T>, AppError>
where
    T: Record + Serialize,
{
    let mut store = store.write().await;
    let created = store
        .insert(record)
        .map_err(|err| rejected(metrics, entity, err))?;

    metrics.set_records(entity, store.len());
    tracing::info!("Created {} record {}", entity, created.id());
    Ok(Json(created))
}

pub async fn replace<T>(
    store: &SharedStore<T>,
    metrics: &AppMetrics,
    entity: &str,
    id: u64,
    record: T,
) -> Result<Json<T>, AppError>
where
    T: Record + Serialize,
{
    let mut store = store.write().await;
    let replaced = store
        .replace(id, record)
        .map_err(|err| rejected(metrics, entity, err))?;

    tracing::info!("Replaced {} record {}", entity, id);
    Ok(Json(replaced))
}

pub async fn remove<T>(
    store: &SharedStore<T>,
    metrics: &AppMetrics,
    entity: &str,
    id: u64,
) -> Result<Json<T>, AppError>
where
    T: Record + Serialize,
{
    let mut store = store.write().await;
    let removed = store
        .delete(id)
        .map_err(|err| rejected(metrics, entity, err))?;

    metrics.set_records(entity, store.len());
    tracing::info!("Deleted {} record {}", entity, id);
    Ok(Json(removed))
}

fn rejected(metrics: &AppMetrics, entity: &str, err: StoreError) -> AppError {
    tracing::warn!("Rejected {} write: {}", entity, err);
    metrics.reject_write(entity, err.kind());
    err.into()
}
