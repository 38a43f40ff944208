//! Parsed issuing-network rules and the textual fields they come from.

use std::collections::BTreeSet;

use tracing::debug;

use super::domain::IssuingNetworkRecord;

/// Inclusive numeric range over the leading digits of a card number. The
/// digit count of `min` decides how many leading digits are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    pub min: u64,
    pub max: u64,
}

impl NumericRange {
    /// True iff the integer formed by the first `k` digits of `card_number`
    /// lies within `[min, max]`, where `k` is the digit count of `min`.
    /// Cards shorter than `k` digits never match, and an inverted range
    /// matches nothing.
    pub fn contains_leading(&self, card_number: &str) -> bool {
        let span = self.min.to_string().len();
        let Some(leading) = card_number.get(..span) else {
            return false;
        };
        match leading.parse::<u64>() {
            Ok(value) => value >= self.min && value <= self.max,
            Err(_) => false,
        }
    }
}

/// Parse a textual `"min-max"` range. Absent on empty input, a part count
/// other than two, or non-numeric parts; `min <= max` is not enforced here.
pub fn parse_range(text: &str) -> Option<NumericRange> {
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 2 {
        return None;
    }

    let min = parts[0].trim().parse::<u64>().ok()?;
    let max = parts[1].trim().parse::<u64>().ok()?;

    Some(NumericRange { min, max })
}

/// In-memory rule for one issuing network, derived from a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRule {
    pub id: i64,
    pub name: String,
    pub prefixes: BTreeSet<u64>,
    pub range: Option<NumericRange>,
    pub allowed_lengths: BTreeSet<usize>,
}

impl NetworkRule {
    pub fn from_record(record: &IssuingNetworkRecord) -> Self {
        let prefixes = record
            .starts_with_numbers
            .as_deref()
            .map(|text| parse_number_list(text, record))
            .unwrap_or_default();

        let range = record.in_range.as_deref().and_then(parse_range);

        let allowed_lengths = parse_number_list(&record.allowed_lengths, record)
            .into_iter()
            .map(|length| length as usize)
            .collect();

        Self {
            id: record.id,
            name: record.name.clone(),
            prefixes,
            range,
            allowed_lengths,
        }
    }
}

/// Derive the in-memory rule set, preserving record order. Order is the
/// matching precedence.
pub fn build_rule_set(records: &[IssuingNetworkRecord]) -> Vec<NetworkRule> {
    records.iter().map(NetworkRule::from_record).collect()
}

// Unparsable elements are skipped so one bad entry cannot take down the
// rest of the rule, let alone the whole classification.
fn parse_number_list(text: &str, record: &IssuingNetworkRecord) -> BTreeSet<u64> {
    let mut values = BTreeSet::new();
    for element in text.split(',') {
        let element = element.trim();
        if element.is_empty() {
            continue;
        }
        match element.parse::<u64>() {
            Ok(value) => {
                values.insert(value);
            }
            Err(_) => {
                debug!(network = %record.name, element, "skipping unparsable rule element");
            }
        }
    }
    values
}
