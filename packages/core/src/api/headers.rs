use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;

use crate::error::AppError;

/// Compute a weakly-stable quoted ETag from response bytes.
pub fn compute_etag(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Returns true when `If-None-Match` contains `*` or the exact current ETag.
pub fn if_none_match_matches(headers: &HeaderMap, current_etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|raw| {
            raw.split(',')
                .map(|tag| tag.trim())
                .any(|tag| tag == "*" || tag == current_etag)
        })
        .unwrap_or(false)
}

/// Serialise `payload` and answer with it, or with `304 Not Modified` when
/// the client already holds the same representation.
pub fn etag_json<T: Serialize>(
    request_headers: &HeaderMap,
    payload: &T,
) -> Result<Response, AppError> {
    let body = serde_json::to_vec(payload)
        .map_err(|err| AppError::Internal(format!("Failed to serialize response: {}", err)))?;
    let etag = compute_etag(&body);

    let builder = Response::builder()
        .header(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))
        .header(header::ETAG, etag.as_str());

    let response = if if_none_match_matches(request_headers, &etag) {
        builder.status(StatusCode::NOT_MODIFIED).body(Body::empty())
    } else {
        builder
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
    };

    response.map_err(|err| AppError::Internal(err.to_string()))
}
