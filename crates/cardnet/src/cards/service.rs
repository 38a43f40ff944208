use std::sync::Arc;

use tracing::debug;

use super::checksum::{is_digits_only, is_luhn_valid};
use super::classifier::classify;
use super::domain::{ClassificationOutcome, CreditCardResult, IssuingNetworkRecord};
use super::repository::{NetworkRuleRepository, RepositoryError};
use super::rules::build_rule_set;

/// Orchestrates one classification request: strict digit gate, Luhn
/// checksum, rule-set derivation, first-match-wins classification.
///
/// Stateless and re-entrant; every call re-reads the repository so the
/// outcome always reflects the latest records.
pub struct CardValidationService<R> {
    repository: Arc<R>,
}

impl<R> CardValidationService<R>
where
    R: NetworkRuleRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolve `card_number` to exactly one outcome.
    ///
    /// The checksum flag is always computed for digit-only input and always
    /// reported, but never gates classification; only the digit-only syntax
    /// check does. A repository fault is the single hard error path.
    pub fn validate(&self, card_number: &str) -> Result<ClassificationOutcome, CardServiceError> {
        if !is_digits_only(card_number) {
            debug!(length = card_number.len(), "input failed digit-only gate");
            return Ok(ClassificationOutcome::BadRequest(
                CreditCardResult::bad_request(),
            ));
        }

        let checksum_valid = is_luhn_valid(card_number);

        let records = self.repository.all()?;
        let rules = build_rule_set(&records);

        match classify(card_number, &rules) {
            Some(rule) => {
                debug!(network = %rule.name, checksum_valid, "issuing network matched");
                Ok(ClassificationOutcome::Matched(CreditCardResult::matched(
                    rule.name.as_str(),
                    checksum_valid,
                )))
            }
            None => {
                debug!(checksum_valid, "no issuing network matched");
                Ok(ClassificationOutcome::NotFound(CreditCardResult::not_found(
                    checksum_valid,
                )))
            }
        }
    }

    /// All configured rule records, in matching-precedence order.
    pub fn networks(&self) -> Result<Vec<IssuingNetworkRecord>, CardServiceError> {
        Ok(self.repository.all()?)
    }

    /// One rule record by id.
    pub fn network(&self, id: i64) -> Result<IssuingNetworkRecord, CardServiceError> {
        self.repository
            .by_id(id)?
            .ok_or(CardServiceError::Repository(RepositoryError::NotFound))
    }
}

/// Error raised by the validation service.
#[derive(Debug, thiserror::Error)]
pub enum CardServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
