use std::path::PathBuf;

use osm_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// Normalization was asked to rewrite a value that has no extractable token.
    #[error("no token could be extracted from {value:?}")]
    ExtractionFailed { value: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read audit config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse audit config {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("audit '{name}' is defined more than once")]
    DuplicateAudit { name: String },

    #[error("audit '{name}' has an empty target_key")]
    EmptyTargetKey { name: String },

    #[error("unknown audit '{name}' (available: {available})")]
    UnknownAudit { name: String, available: String },
}
