//! First-match-wins resolution of a card number against the rule set.

use super::rules::NetworkRule;

/// Scan `rules` in declaration order and return the first match, if any.
///
/// A rule matches when the card's total digit count is one of its allowed
/// lengths and either a configured prefix or the numeric range covers the
/// leading digits. A rule excluded on length alone does not stop the scan.
/// `card_number` must already have passed the strict digit gate.
pub fn classify<'a>(card_number: &str, rules: &'a [NetworkRule]) -> Option<&'a NetworkRule> {
    rules.iter().find(|rule| rule_matches(card_number, rule))
}

fn rule_matches(card_number: &str, rule: &NetworkRule) -> bool {
    if !rule.allowed_lengths.contains(&card_number.len()) {
        return false;
    }

    let prefix_match = rule
        .prefixes
        .iter()
        .any(|prefix| card_number.starts_with(&prefix.to_string()));

    let range_match = rule
        .range
        .is_some_and(|range| range.contains_leading(card_number));

    prefix_match || range_match
}
