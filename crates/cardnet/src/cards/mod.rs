//! Card classification and checksum engine.
//!
//! Raw input flows one direction: the service gates it through the strict
//! digit check, computes the Luhn checksum, derives the in-memory rule set
//! from the repository's raw records, and runs the first-match-wins
//! classifier. Every outcome is a value; the only error path is the
//! repository fetch.

pub mod catalog;
pub mod checksum;
pub mod classifier;
pub mod domain;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::CatalogImportError;
pub use classifier::classify;
pub use domain::{ClassificationOutcome, CreditCardResult, IssuingNetworkRecord};
pub use repository::{NetworkRuleRepository, RepositoryError};
pub use router::card_router;
pub use rules::{build_rule_set, parse_range, NetworkRule, NumericRange};
pub use service::{CardServiceError, CardValidationService};
