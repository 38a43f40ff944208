use super::domain::IssuingNetworkRecord;

/// Provider abstraction for issuing-network rule records so the engine can
/// be exercised without a storage backend. Fetching completes before
/// classification begins; the engine itself performs no I/O.
pub trait NetworkRuleRepository: Send + Sync {
    /// Fetch every configured rule record, in declaration order.
    fn all(&self) -> Result<Vec<IssuingNetworkRecord>, RepositoryError>;
    /// Fetch one rule record by its identifier.
    fn by_id(&self, id: i64) -> Result<Option<IssuingNetworkRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("issuing network not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
