use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
};

/// `GET /health` - liveness probe. Never cached.
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        "ok",
    )
}
