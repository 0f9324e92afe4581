//! Audit definitions.

use osm_model::{CorrectionTable, Vocabulary};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::AuditError;
use crate::normalize::normalize;
use crate::pattern::ExtractPattern;

/// Street types accepted as already conforming.
pub const STREET_VOCABULARY: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Drive", "Court", "Place", "Square", "Lane", "Road", "Trail",
    "Parkway", "Commons", "West", "East", "South", "North", "Way",
];

/// Abbreviations and typos seen in street names, with their canonical form.
pub const STREET_CORRECTIONS: &[(&str, &str)] = &[
    ("St", "Street"),
    ("St.", "Street"),
    ("Rd.", "Road"),
    ("Ave", "Avenue"),
    ("west", "West"),
    ("W", "West"),
    ("street", "Street"),
    ("Blvd", "Boulevard"),
    ("Denmanstreet", "Denman Street"),
];

/// The only state abbreviation accepted in `is_in:state_code`.
pub const STATE_VOCABULARY: &[&str] = &["NSW"];

/// One audit: which key to scan, how to extract a token, and what counts as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSpec {
    pub name: String,
    pub target_key: String,
    pub pattern: ExtractPattern,
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub corrections: CorrectionTable,
}

impl AuditSpec {
    pub fn new(
        name: impl Into<String>,
        target_key: impl Into<String>,
        pattern: ExtractPattern,
    ) -> Self {
        Self {
            name: name.into(),
            target_key: target_key.into(),
            pattern,
            vocabulary: Vocabulary::empty(),
            corrections: CorrectionTable::default(),
        }
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    #[must_use]
    pub fn with_corrections(mut self, corrections: CorrectionTable) -> Self {
        self.corrections = corrections;
        self
    }

    /// Four-digit postal codes in `addr:postcode`. Every match is reported.
    pub fn postcode() -> Self {
        Self::new("postcode", "addr:postcode", ExtractPattern::PostalCode)
    }

    /// Three-digit codes in `addr:state`, which are postal-style codes entered as states.
    pub fn state_digits() -> Self {
        Self::new("state-digits", "addr:state", ExtractPattern::StateDigits)
    }

    /// State abbreviations in `is_in:state_code`.
    pub fn state() -> Self {
        Self::new("state", "is_in:state_code", ExtractPattern::TrailingWord)
            .with_vocabulary(Vocabulary::new(STATE_VOCABULARY.iter().copied()))
    }

    /// Street-type suffixes in `addr:street`.
    pub fn street() -> Self {
        Self::new("street", "addr:street", ExtractPattern::TrailingWord)
            .with_vocabulary(Vocabulary::new(STREET_VOCABULARY.iter().copied()))
            .with_corrections(CorrectionTable::new(STREET_CORRECTIONS.iter().copied()))
    }

    /// The built-in audits, in display order.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::postcode(),
            Self::state_digits(),
            Self::state(),
            Self::street(),
        ]
    }

    pub fn classify<'v>(&self, value: &'v str) -> Option<(&'v str, &'v str)> {
        classify(value, self.pattern, &self.vocabulary)
    }

    pub fn normalize(&self, value: &str) -> Result<String, AuditError> {
        normalize(value, self.pattern, &self.vocabulary, &self.corrections)
    }
}
