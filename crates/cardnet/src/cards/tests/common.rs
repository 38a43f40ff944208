use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::cards::domain::IssuingNetworkRecord;
use crate::cards::repository::{NetworkRuleRepository, RepositoryError};
use crate::cards::service::CardValidationService;
use crate::cards::{build_rule_set, card_router, NetworkRule};

pub(super) fn visa_record() -> IssuingNetworkRecord {
    IssuingNetworkRecord {
        id: 1,
        name: "Visa".to_string(),
        starts_with_numbers: Some("4".to_string()),
        in_range: None,
        allowed_lengths: "13,16,19".to_string(),
    }
}

pub(super) fn mastercard_record() -> IssuingNetworkRecord {
    IssuingNetworkRecord {
        id: 2,
        name: "Mastercard".to_string(),
        starts_with_numbers: None,
        in_range: Some("51-55".to_string()),
        allowed_lengths: "16".to_string(),
    }
}

pub(super) fn amex_record() -> IssuingNetworkRecord {
    IssuingNetworkRecord {
        id: 3,
        name: "American Express".to_string(),
        starts_with_numbers: Some("34,37".to_string()),
        in_range: None,
        allowed_lengths: "15".to_string(),
    }
}

pub(super) fn default_records() -> Vec<IssuingNetworkRecord> {
    vec![visa_record(), mastercard_record(), amex_record()]
}

pub(super) fn default_rules() -> Vec<NetworkRule> {
    build_rule_set(&default_records())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<IssuingNetworkRecord>>>,
}

impl MemoryRepository {
    pub(super) fn with_records(records: Vec<IssuingNetworkRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl NetworkRuleRepository for MemoryRepository {
    fn all(&self) -> Result<Vec<IssuingNetworkRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn by_id(&self, id: i64) -> Result<Option<IssuingNetworkRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl NetworkRuleRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<IssuingNetworkRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn by_id(&self, _id: i64) -> Result<Option<IssuingNetworkRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> CardValidationService<MemoryRepository> {
    CardValidationService::new(Arc::new(MemoryRepository::with_records(default_records())))
}

pub(super) fn service_with_records(
    records: Vec<IssuingNetworkRecord>,
) -> CardValidationService<MemoryRepository> {
    CardValidationService::new(Arc::new(MemoryRepository::with_records(records)))
}

pub(super) fn card_router_with_records(records: Vec<IssuingNetworkRecord>) -> axum::Router {
    let service = Arc::new(CardValidationService::new(Arc::new(
        MemoryRepository::with_records(records),
    )));
    card_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
