use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Values that need review, grouped by the token extracted from them.
///
/// Iteration is sorted by token, then by value. Repeated values collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditResult {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl AuditResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `token`. Returns false when the value was already present.
    pub fn record(&mut self, token: impl Into<String>, value: impl Into<String>) -> bool {
        self.groups
            .entry(token.into())
            .or_default()
            .insert(value.into())
    }

    pub fn get(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.groups.contains_key(token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(token, values)| (token.as_str(), values))
    }

    /// Every recorded value in token order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.groups.values().flatten().map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct values across all tokens.
    pub fn value_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}

/// One element of the normalization output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}

impl Correction {
    pub fn new(original: impl Into<String>, corrected: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            corrected: corrected.into(),
        }
    }

    pub fn changed(&self) -> bool {
        self.original != self.corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_values_collapse() {
        let mut result = AuditResult::new();
        assert!(result.record("2000", "2000"));
        assert!(!result.record("2000", "2000"));
        assert!(result.record("2000", "NSW 2000"));

        assert_eq!(result.len(), 1);
        assert_eq!(result.value_count(), 2);
        assert_eq!(
            result.values().collect::<Vec<_>>(),
            vec!["2000", "NSW 2000"]
        );
    }

    #[test]
    fn tokens_iterate_sorted() {
        let mut result = AuditResult::new();
        result.record("St.", "a St.");
        result.record("Ave", "b Ave");
        result.record("Rd.", "c Rd.");
        assert_eq!(result.tokens().collect::<Vec<_>>(), vec!["Ave", "Rd.", "St."]);
    }

    #[test]
    fn correction_reports_change() {
        assert!(Correction::new("Baldwin Rd.", "Baldwin Road").changed());
        assert!(!Correction::new("Main Street", "Main Street").changed());
    }
}
