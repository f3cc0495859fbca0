//! Integration tests for all API endpoints.
//!
//! Each test boots the full Axum router (same assembly as `main.rs`) using
//! `tower::ServiceExt::oneshot` - no live server needed.
//!
//! `build_test_app()` wires together:
//! - Fresh stores loaded with the sample records
//! - Prometheus `AppMetrics`
//! - The complete `Router` under the default `/api` prefix

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use livestock_health_tracker::{
    api::{create_router, AppState},
    metrics::AppMetrics,
    models::SUM_MISMATCH_MESSAGE,
};

// ---- Helpers ----------------------------------------------------------------

fn build_state() -> AppState {
    AppState::seeded(Arc::new(AppMetrics::new().unwrap()))
}

fn build_test_app() -> Router {
    create_router(build_state(), "/api")
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(json: &Value) -> Vec<u64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect()
}

fn new_movement(document_number: &str) -> Value {
    json!({
        "id": 77,
        "type": "import",
        "country": "Chile",
        "animalCount": 40,
        "animalType": "Ovino",
        "purpose": "Reproducción",
        "healthStatus": "Saludable",
        "documentNumber": document_number,
        "dateOfMovement": "2025-05-01T12:00:00Z",
        "responsible": "Importadora Austral",
        "destination": "Boyacá",
        "coordinates": {
            "origin": { "lat": -33.45, "lng": -70.66 },
            "destination": { "lat": 5.53, "lng": -73.36 }
        }
    })
}

fn new_outbreak(status: &str) -> Value {
    json!({
        "diseaseType": "Rabia Bovina",
        "status": status,
        "severity": "media",
        "detectionDate": "2025-05-03T09:00:00Z",
        "region": "Casanare",
        "municipality": "Yopal",
        "affectedAnimals": 6,
        "measures": "Vacunación perifocal",
        "responsibleTechnician": "Dr. Andrés Gómez",
        "progress": [{ "date": "2025-05-03", "newCases": 6, "totalCases": 6 }],
        "coordinates": { "lat": 5.34, "lng": -72.39 }
    })
}

fn new_vaccination(total: u64, male: u64, female: u64, young: u64, adult: u64) -> Value {
    json!({
        "vaccinatorId": "4",
        "vaccinatorName": "Ana Torres",
        "farm": "Finca La Esperanza",
        "municipality": "Tunja",
        "region": "Boyacá",
        "campaign": "Campaña Nacional 2025 - Fase 2",
        "campaignStatus": "Programada",
        "vaccineType": "Aftosa Bivalente",
        "animalsVaccinated": total,
        "maleCount": male,
        "femaleCount": female,
        "youngCount": young,
        "adultCount": adult,
        "coordinates": { "lat": 5.53, "lng": -73.36 }
    })
}

// ---- GET / and /health ------------------------------------------------------

#[tokio::test]
async fn root_lists_endpoint_groups() {
    let app = build_test_app();
    let (status, json) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["endpoints"]["movements"], "/api/movements");
    assert_eq!(json["endpoints"]["public_stats"], "/api/public/stats");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_returns_200_with_ok_body() {
    let app = build_test_app();
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

// ---- Movements ----------------------------------------------------------------

#[tokio::test]
async fn movements_list_without_filters_returns_seed_in_order() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/movements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn movements_filter_is_conjunctive() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/movements?type=import&country=Brasil").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1]);
    assert_eq!(json[0]["documentNumber"], "IMP-2025-0125");
}

#[tokio::test]
async fn movements_filter_by_alert_flag_accepts_both_spellings() {
    let app = build_test_app();
    let (_, camel) = get(&app, "/api/movements?hasAlert=true").await;
    let (_, snake) = get(&app, "/api/movements?has_alert=true").await;
    assert_eq!(ids(&camel), vec![5]);
    assert_eq!(ids(&snake), vec![5]);
}

#[tokio::test]
async fn movements_filter_with_empty_type_returns_everything() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/movements?type=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn movements_filter_with_unknown_type_returns_empty_list() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/movements?type=transit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn movement_get_by_id_and_missing_id() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/movements/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["country"], "México");

    let (status, json) = get(&app, "/api/movements/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Movement not found");
}

#[tokio::test]
async fn movement_create_assigns_next_id_ignoring_body_id() {
    let app = build_test_app();
    let (status, json) = send(&app, Method::POST, "/api/movements", Some(new_movement("IMP-2025-0200"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 6);
    assert_eq!(json["hasAlert"], false);

    let (_, list) = get(&app, "/api/movements").await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn movement_create_with_duplicate_document_number_returns_400() {
    let app = build_test_app();
    let (status, json) = send(&app, Method::POST, "/api/movements", Some(new_movement("IMP-2025-0125"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (_, list) = get(&app, "/api/movements").await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn movement_replace_does_not_recheck_document_number() {
    let app = build_test_app();
    let (status, json) = send(&app, Method::PUT, "/api/movements/3", Some(new_movement("IMP-2025-0125"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 3);
    assert_eq!(json["documentNumber"], "IMP-2025-0125");

    let (_, stored) = get(&app, "/api/movements/3").await;
    assert_eq!(stored["country"], "Chile");
}

#[tokio::test]
async fn movement_replace_missing_id_returns_404() {
    let app = build_test_app();
    let (status, _) = send(&app, Method::PUT, "/api/movements/42", Some(new_movement("X-1"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movement_delete_then_get_is_404() {
    let app = build_test_app();
    let (status, json) = send(&app, Method::DELETE, "/api/movements/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["documentNumber"], "EXP-2025-0103");

    let (status, _) = get(&app, "/api/movements/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = get(&app, "/api/movements").await;
    assert_eq!(ids(&list), vec![1, 2, 3, 5]);

    let (status, _) = send(&app, Method::DELETE, "/api/movements/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_movement_body_is_rejected_before_the_store() {
    let app = build_test_app();
    let (status, _) = send(&app, Method::POST, "/api/movements", Some(json!({ "type": "import" }))).await;
    assert!(status.is_client_error());

    let (_, list) = get(&app, "/api/movements").await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

// ---- Outbreaks ------------------------------------------------------------------

#[tokio::test]
async fn outbreaks_active_route_is_not_parsed_as_id() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/outbreaks/active").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 4]);
}

#[tokio::test]
async fn outbreaks_filter_by_status_and_disease() {
    let app = build_test_app();
    let (_, json) = get(&app, "/api/outbreaks?status=active&diseaseType=Fiebre%20Aftosa").await;
    assert_eq!(ids(&json), vec![1]);

    let (_, json) = get(&app, "/api/outbreaks?region=Antioquia").await;
    assert_eq!(ids(&json), vec![2]);
}

#[tokio::test]
async fn outbreaks_filter_with_empty_or_unknown_status() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/outbreaks?status=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 2, 3, 4]);

    let (status, json) = get(&app, "/api/outbreaks?status=dormant").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn outbreak_create_update_delete_cycle() {
    let app = build_test_app();
    let (status, created) = send(&app, Method::POST, "/api/outbreaks", Some(new_outbreak("active"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 5);

    let mut update = new_outbreak("controlled");
    update["id"] = json!(1000);
    let (status, updated) = send(&app, Method::PUT, "/api/outbreaks/5", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 5);
    assert_eq!(updated["status"], "controlled");

    let (status, _) = send(&app, Method::DELETE, "/api/outbreaks/5", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = get(&app, "/api/outbreaks/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Outbreak not found");
}

#[tokio::test]
async fn outbreak_with_unknown_status_is_rejected() {
    let app = build_test_app();
    let (status, _) = send(&app, Method::POST, "/api/outbreaks", Some(new_outbreak("dormant"))).await;
    assert!(status.is_client_error());

    let (_, list) = get(&app, "/api/outbreaks").await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

// ---- Vaccinations ---------------------------------------------------------------

#[tokio::test]
async fn vaccination_stats_route_is_not_parsed_as_id() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/vaccinations/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalAnimals"], 1040);
    assert_eq!(json["totalVaccinations"], 5);
}

#[tokio::test]
async fn vaccinations_filter_by_vaccinator() {
    let app = build_test_app();
    let (_, json) = get(&app, "/api/vaccinations?vaccinatorId=1").await;
    assert_eq!(ids(&json), vec![1, 2, 3]);

    let (_, json) = get(&app, "/api/vaccinations?region=Antioquia&vaccinatorId=1").await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn vaccination_create_with_mismatched_counts_returns_400() {
    let app = build_test_app();
    let (status, json) = send(
        &app,
        Method::POST,
        "/api/vaccinations",
        Some(new_vaccination(100, 40, 50, 50, 50)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], SUM_MISMATCH_MESSAGE);

    let (_, stats) = get(&app, "/api/vaccinations/stats").await;
    assert_eq!(stats["totalVaccinations"], 5);
}

#[tokio::test]
async fn vaccination_create_defaults_date_and_updates_stats() {
    let app = build_test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/vaccinations",
        Some(new_vaccination(60, 20, 40, 10, 50)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 6);
    assert!(created["dateCreated"].is_string());

    let (_, stats) = get(&app, "/api/vaccinations/stats").await;
    assert_eq!(stats["totalAnimals"], 1100);
    assert_eq!(stats["totalVaccinations"], 6);
}

#[tokio::test]
async fn vaccination_totals_beyond_u64_are_reported_exactly() {
    let app = create_router(AppState::empty(Arc::new(AppMetrics::new().unwrap())), "/api");
    let half = u64::MAX / 2 + 1;
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/vaccinations",
            Some(new_vaccination(half, half, 0, half, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    for uri in ["/api/vaccinations/stats", "/api/public/stats"] {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("\"totalAnimals\":18446744073709551616"), "{}", body);
    }
}

#[tokio::test]
async fn vaccination_replace_validates_and_forces_id() {
    let app = build_test_app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/vaccinations/2",
        Some(new_vaccination(100, 50, 50, 30, 60)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, unchanged) = get(&app, "/api/vaccinations/2").await;
    assert_eq!(unchanged["animalsVaccinated"], 230);

    let mut body = new_vaccination(100, 50, 50, 40, 60);
    body["id"] = json!(9);
    let (status, replaced) = send(&app, Method::PUT, "/api/vaccinations/2", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], 2);
}

#[tokio::test]
async fn vaccination_delete_missing_returns_404_with_message() {
    let app = build_test_app();
    let (status, json) = send(&app, Method::DELETE, "/api/vaccinations/12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Vaccination record not found");
}

// ---- Public stats -----------------------------------------------------------------

#[tokio::test]
async fn public_stats_overview() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/public/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalAnimals"], 1040);
    assert_eq!(json["totalImports"], 3);
    assert_eq!(json["totalExports"], 2);
    assert_eq!(json["activeOutbreaks"], 2);
    assert_eq!(json["animalsByRegion"]["Cundinamarca"], 525);
    assert_eq!(json["animalsByRegion"]["Antioquia"], 320);
}

#[tokio::test]
async fn public_movements_summary() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/public/movements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalImports"], 445);
    assert_eq!(json["totalExports"], 270);
    assert_eq!(json["movementsByCountry"]["Perú"]["exports"], 90);
    assert_eq!(json["movementsByCountry"]["Perú"]["imports"], 0);
    assert_eq!(json["purposeDistribution"]["Reproducción"], 370);
}

#[tokio::test]
async fn public_outbreaks_status_distribution() {
    let app = build_test_app();
    let (status, json) = get(&app, "/api/public/outbreaks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["statusDistribution"],
        json!({ "active": 2, "controlled": 1, "eradicated": 1 })
    );
    assert_eq!(json["totalOutbreaks"], 4);
    assert_eq!(json["totalAffectedAnimals"], 113);
}

#[tokio::test]
async fn public_stats_reflect_writes_immediately() {
    let app = build_test_app();
    send(&app, Method::DELETE, "/api/outbreaks/1", None).await;

    let (_, json) = get(&app, "/api/public/outbreaks").await;
    assert_eq!(json["statusDistribution"]["active"], 1);
    let (_, json) = get(&app, "/api/public/stats").await;
    assert_eq!(json["activeOutbreaks"], 1);
}

#[tokio::test]
async fn public_stats_honours_if_none_match() {
    let app = build_test_app();
    let first = app
        .clone()
        .oneshot(Request::builder().uri("/api/public/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let etag = first.headers().get(header::ETAG).unwrap().clone();

    let second = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/public/stats")
                .header(header::IF_NONE_MATCH, etag.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);

    // A write changes the representation, so the old tag no longer matches.
    send(&app, Method::POST, "/api/vaccinations", Some(new_vaccination(10, 5, 5, 5, 5))).await;
    let third = app
        .oneshot(
            Request::builder()
                .uri("/api/public/stats")
                .header(header::IF_NONE_MATCH, etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(third.status(), StatusCode::OK);
    let json = json_body(third.into_body()).await;
    assert_eq!(json["totalAnimals"], 1050);
}

// ---- Prefix, empty stores, metrics --------------------------------------------------

#[tokio::test]
async fn routes_can_be_served_without_prefix() {
    let app = create_router(build_state(), "");
    let (status, json) = get(&app, "/movements/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn empty_stores_start_ids_at_one() {
    let app = create_router(AppState::empty(Arc::new(AppMetrics::new().unwrap())), "/api");
    let (_, list) = get(&app, "/api/outbreaks").await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, created) = send(&app, Method::POST, "/api/outbreaks", Some(new_outbreak("active"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);

    let (_, summary) = get(&app, "/api/public/outbreaks").await;
    assert_eq!(summary["statusDistribution"]["active"], 1);
    assert_eq!(summary["statusDistribution"]["eradicated"], 0);
}

#[tokio::test]
async fn metrics_endpoint_reports_requests_and_rejections() {
    let state = build_state();
    let metrics = state.metrics.clone();
    let app = create_router(state, "/api");

    send(&app, Method::POST, "/api/movements", Some(new_movement("IMP-2025-0125"))).await;
    get(&app, "/api/movements").await;

    let rejected = metrics
        .writes_rejected_total
        .with_label_values(&["movements", "conflict"])
        .get();
    assert!((rejected - 1.0).abs() < f64::EPSILON);

    let resp = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
    assert_eq!(ct, "text/plain; version=0.0.4");
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("livestock_tracker_http_requests_total"));
    assert!(body.contains("livestock_tracker_records_stored"));
}
