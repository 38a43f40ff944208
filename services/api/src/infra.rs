use cardnet::cards::catalog;
use cardnet::cards::{IssuingNetworkRecord, NetworkRuleRepository, RepositoryError};
use cardnet::config::NetworkSourceConfig;
use cardnet::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Declaration order is matching precedence, so the backing store is a Vec.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNetworkRepository {
    records: Arc<Mutex<Vec<IssuingNetworkRecord>>>,
}

impl InMemoryNetworkRepository {
    pub(crate) fn with_records(records: Vec<IssuingNetworkRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl NetworkRuleRepository for InMemoryNetworkRepository {
    fn all(&self) -> Result<Vec<IssuingNetworkRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn by_id(&self, id: i64) -> Result<Option<IssuingNetworkRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }
}

/// Built-in seed catalog of the major issuing networks. More specific rules
/// come before broader ones where prefixes could overlap.
pub(crate) fn default_network_records() -> Vec<IssuingNetworkRecord> {
    vec![
        IssuingNetworkRecord {
            id: 1,
            name: "American Express".to_string(),
            starts_with_numbers: Some("34,37".to_string()),
            in_range: None,
            allowed_lengths: "15".to_string(),
        },
        IssuingNetworkRecord {
            id: 2,
            name: "Diners Club".to_string(),
            starts_with_numbers: Some("36,38".to_string()),
            in_range: Some("300-305".to_string()),
            allowed_lengths: "14".to_string(),
        },
        IssuingNetworkRecord {
            id: 3,
            name: "JCB".to_string(),
            starts_with_numbers: None,
            in_range: Some("3528-3589".to_string()),
            allowed_lengths: "16,17,18,19".to_string(),
        },
        IssuingNetworkRecord {
            id: 4,
            name: "Discover".to_string(),
            starts_with_numbers: Some("6011,65".to_string()),
            in_range: Some("622126-622925".to_string()),
            allowed_lengths: "16,17,18,19".to_string(),
        },
        IssuingNetworkRecord {
            id: 5,
            name: "Mastercard".to_string(),
            starts_with_numbers: Some("51,52,53,54,55".to_string()),
            in_range: Some("222100-272099".to_string()),
            allowed_lengths: "16".to_string(),
        },
        IssuingNetworkRecord {
            id: 6,
            name: "Visa".to_string(),
            starts_with_numbers: Some("4".to_string()),
            in_range: None,
            allowed_lengths: "13,16,19".to_string(),
        },
    ]
}

/// Resolve the rule records for this process: a CSV catalog when one is
/// configured, the built-in seed otherwise.
pub(crate) fn load_network_records(
    source: &NetworkSourceConfig,
) -> Result<Vec<IssuingNetworkRecord>, AppError> {
    match &source.csv_path {
        Some(path) => Ok(catalog::load_records_from_path(path)?),
        None => Ok(default_network_records()),
    }
}
