use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity kinds whose tags take part in an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Node,
    Way,
}

impl OwnerKind {
    /// Element name used for this kind in an OSM XML export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
        }
    }

    /// Match a raw element name, returning `None` for anything that is not a node or way.
    pub fn from_element_name(name: &[u8]) -> Option<Self> {
        match name {
            b"node" => Some(Self::Node),
            b"way" => Some(Self::Way),
            _ => None,
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<tag k=".." v=".."/>` taken from a node or way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub owner: OwnerKind,
    pub key: String,
    pub value: String,
}

impl TagRecord {
    pub fn new(owner: OwnerKind, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            owner,
            key: key.into(),
            value: value.into(),
        }
    }
}
