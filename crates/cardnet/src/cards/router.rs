use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ClassificationOutcome;
use super::repository::{NetworkRuleRepository, RepositoryError};
use super::service::{CardServiceError, CardValidationService};

/// Router builder exposing the classification and network-lookup endpoints.
pub fn card_router<R>(service: Arc<CardValidationService<R>>) -> Router
where
    R: NetworkRuleRepository + 'static,
{
    Router::new()
        .route("/api/v1/cards/validate", post(validate_handler::<R>))
        .route("/api/v1/networks", get(networks_handler::<R>))
        .route("/api/v1/networks/:network_id", get(network_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    pub(crate) card_number: String,
}

pub(crate) async fn validate_handler<R>(
    State(service): State<Arc<CardValidationService<R>>>,
    axum::Json(request): axum::Json<ValidateRequest>,
) -> Response
where
    R: NetworkRuleRepository + 'static,
{
    match service.validate(&request.card_number) {
        Ok(outcome) => {
            let status = match outcome {
                ClassificationOutcome::Matched(_) => StatusCode::OK,
                ClassificationOutcome::BadRequest(_) => StatusCode::BAD_REQUEST,
                ClassificationOutcome::NotFound(_) => StatusCode::NOT_FOUND,
            };
            (status, axum::Json(outcome.into_result())).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn networks_handler<R>(
    State(service): State<Arc<CardValidationService<R>>>,
) -> Response
where
    R: NetworkRuleRepository + 'static,
{
    match service.networks() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn network_handler<R>(
    State(service): State<Arc<CardValidationService<R>>>,
    Path(network_id): Path<i64>,
) -> Response
where
    R: NetworkRuleRepository + 'static,
{
    match service.network(network_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(CardServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "issuing network not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
