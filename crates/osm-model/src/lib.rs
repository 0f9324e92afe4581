//! Data model shared by the OSM address audit crates.

pub mod audit;
pub mod keys;
pub mod tag;
pub mod vocabulary;

pub use audit::{AuditResult, Correction};
pub use keys::{KeyCategory, KeyTypeCounts};
pub use tag::{OwnerKind, TagRecord};
pub use vocabulary::{CorrectionTable, Vocabulary};
