//! Address audits over OSM tag values.
//!
//! An audit is described by an [`AuditSpec`]: which tag key to scan, which
//! [`ExtractPattern`] pulls a token out of each value, the vocabulary of tokens
//! that already conform, and a correction table for rewriting the rest.
//!
//! ```ignore
//! use osm_audit::{AuditSpec, audit_file, normalize_result};
//!
//! let spec = AuditSpec::street();
//! let report = audit_file("sydney_australia.osm", &spec)?;
//! for correction in normalize_result(&report.result, &spec)? {
//!     println!("{} => {}", correction.original, correction.corrected);
//! }
//! ```

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod spec;

pub use classify::classify;
pub use config::AuditConfig;
pub use engine::{AuditReport, audit_file, run_audit};
pub use error::{AuditError, ConfigError};
pub use normalize::{normalize, normalize_result, normalize_stream};
pub use pattern::{ExtractPattern, Token};
pub use spec::AuditSpec;
