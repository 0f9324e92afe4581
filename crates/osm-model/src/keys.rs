use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of a tag key, as counted by the key-type scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    /// Only lowercase letters and underscores.
    Lower,
    /// Two lowercase/underscore parts joined by a single colon.
    LowerColon,
    /// Contains a character that is unsafe in a key.
    #[serde(rename = "problemchars")]
    ProblemChars,
    Other,
}

impl KeyCategory {
    pub const ALL: [KeyCategory; 4] = [
        KeyCategory::Lower,
        KeyCategory::LowerColon,
        KeyCategory::ProblemChars,
        KeyCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::LowerColon => "lower_colon",
            Self::ProblemChars => "problemchars",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category key counts. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyTypeCounts {
    counts: BTreeMap<KeyCategory, u64>,
}

impl Default for KeyTypeCounts {
    fn default() -> Self {
        Self {
            counts: KeyCategory::ALL.iter().map(|category| (*category, 0)).collect(),
        }
    }
}

impl KeyTypeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: KeyCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn get(&self, category: KeyCategory) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyCategory, u64)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }
}
