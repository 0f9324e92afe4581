//! Runs an audit over a stream of tag records.

use std::path::Path;

use osm_ingest::TagReader;
use osm_model::{AuditResult, TagRecord};
use serde::Serialize;
use tracing::{info, info_span, trace};

use crate::error::AuditError;
use crate::spec::AuditSpec;

/// Outcome of auditing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub audit: String,
    pub target_key: String,
    pub result: AuditResult,
    /// Tags with the target key that were classified.
    pub records_seen: usize,
    /// Malformed tags skipped by the reader.
    pub skipped: usize,
}

/// Classify every record and collect the values that need review.
///
/// Records for other keys are ignored. The first error from the source ends
/// the run and is returned as is.
pub fn run_audit<I, E>(records: I, spec: &AuditSpec) -> Result<AuditResult, E>
where
    I: IntoIterator<Item = Result<TagRecord, E>>,
{
    let mut result = AuditResult::new();
    for record in records {
        let record = record?;
        if record.key != spec.target_key {
            continue;
        }
        if let Some((token, value)) = spec.classify(&record.value) {
            trace!(owner = %record.owner, token, "value needs review");
            result.record(token, value);
        }
    }
    Ok(result)
}

/// Audit an OSM file in a single streaming pass.
pub fn audit_file(path: impl AsRef<Path>, spec: &AuditSpec) -> Result<AuditReport, AuditError> {
    let path = path.as_ref();
    let span = info_span!("audit", audit = %spec.name, target_key = %spec.target_key);
    let _guard = span.enter();

    let mut reader = TagReader::open(path, spec.target_key.as_str())?;
    let result = run_audit(&mut reader, spec)?;
    info!(
        path = %path.display(),
        records = reader.emitted(),
        skipped = reader.skipped(),
        tokens = result.len(),
        values = result.value_count(),
        "audit complete"
    );
    Ok(AuditReport {
        audit: spec.name.clone(),
        target_key: spec.target_key.clone(),
        records_seen: reader.emitted(),
        skipped: reader.skipped(),
        result,
    })
}
