use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::cards::router::{network_handler, validate_handler, ValidateRequest};
use crate::cards::service::CardValidationService;

#[tokio::test]
async fn validate_route_maps_outcomes_to_statuses() {
    let router = card_router_with_records(default_records());

    for (card_number, expected_status, expected_network) in [
        ("4111111111111111", StatusCode::OK, "Visa"),
        ("4111-1111-1111-1111", StatusCode::BAD_REQUEST, "Bad Request"),
        ("9111111111111", StatusCode::NOT_FOUND, "Not Found"),
    ] {
        let response = router
            .clone()
            .oneshot(
                axum::http::Request::post("/api/v1/cards/validate")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(
                        serde_json::to_vec(&json!({ "card_number": card_number }))
                            .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), expected_status, "card {card_number}");
        let payload = read_json_body(response).await;
        assert_eq!(
            payload.get("network").and_then(serde_json::Value::as_str),
            Some(expected_network)
        );
        assert!(payload.get("checksum_valid").is_some());
    }
}

#[tokio::test]
async fn validate_handler_reports_repository_faults() {
    let service = Arc::new(CardValidationService::new(Arc::new(UnavailableRepository)));

    let response = validate_handler::<UnavailableRepository>(
        State(service),
        axum::Json(ValidateRequest {
            card_number: "4111111111111111".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn networks_route_lists_records() {
    let router = card_router_with_records(default_records());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/networks")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let records = payload.as_array().expect("array payload");
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].get("name").and_then(serde_json::Value::as_str),
        Some("Visa")
    );
}

#[tokio::test]
async fn network_route_returns_single_record_or_not_found() {
    let router = card_router_with_records(default_records());

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::get("/api/v1/networks/3")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("name").and_then(serde_json::Value::as_str),
        Some("American Express")
    );

    let missing = router
        .oneshot(
            axum::http::Request::get("/api/v1/networks/404")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn network_handler_reports_repository_faults() {
    let service = Arc::new(CardValidationService::new(Arc::new(UnavailableRepository)));

    let response =
        network_handler::<UnavailableRepository>(State(service), axum::extract::Path(1)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
