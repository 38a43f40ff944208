use serde::{Deserialize, Serialize};

/// Raw issuing-network rule record as supplied by the external provider.
///
/// The list fields stay opaque text owned by the record; parsing into the
/// in-memory rule model happens per classification call in [`crate::cards::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuingNetworkRecord {
    pub id: i64,
    pub name: String,
    /// Comma-separated integer prefixes, e.g. `"51,52,53,54,55"`.
    #[serde(default)]
    pub starts_with_numbers: Option<String>,
    /// Textual inclusive range `"min-max"`, e.g. `"622126-622925"`.
    #[serde(default)]
    pub in_range: Option<String>,
    /// Comma-separated permitted total digit counts. Required.
    pub allowed_lengths: String,
}

/// Payload carried by every classification outcome: the resolved network
/// name (or a rejection sentinel) and the Luhn checksum flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardResult {
    pub network: String,
    pub checksum_valid: bool,
}

impl CreditCardResult {
    pub fn matched(network: impl Into<String>, checksum_valid: bool) -> Self {
        Self {
            network: network.into(),
            checksum_valid,
        }
    }

    pub fn not_found(checksum_valid: bool) -> Self {
        Self {
            network: "Not Found".to_string(),
            checksum_valid,
        }
    }

    /// Syntax rejections never evaluate the checksum, so the flag is false.
    pub fn bad_request() -> Self {
        Self {
            network: "Bad Request".to_string(),
            checksum_valid: false,
        }
    }
}

/// Tri-state result of validating one card number.
///
/// `Matched` is returned even when the checksum flag is false: matching a
/// network rule and passing the Luhn check are independent signals, and the
/// caller decides how to treat a matched-but-invalid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationOutcome {
    /// Input matched a configured issuing network.
    Matched(CreditCardResult),
    /// Input contained non-digit characters; classification was not run.
    BadRequest(CreditCardResult),
    /// Digit-only input matched no configured network.
    NotFound(CreditCardResult),
}

impl ClassificationOutcome {
    pub const fn label(&self) -> &'static str {
        match self {
            ClassificationOutcome::Matched(_) => "matched",
            ClassificationOutcome::BadRequest(_) => "bad_request",
            ClassificationOutcome::NotFound(_) => "not_found",
        }
    }

    pub fn result(&self) -> &CreditCardResult {
        match self {
            ClassificationOutcome::Matched(result)
            | ClassificationOutcome::BadRequest(result)
            | ClassificationOutcome::NotFound(result) => result,
        }
    }

    pub fn into_result(self) -> CreditCardResult {
        match self {
            ClassificationOutcome::Matched(result)
            | ClassificationOutcome::BadRequest(result)
            | ClassificationOutcome::NotFound(result) => result,
        }
    }
}
