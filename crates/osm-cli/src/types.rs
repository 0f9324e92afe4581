use osm_audit::AuditReport;
use osm_model::Correction;
use serde::Serialize;

/// Result of the `normalize` command: the audit it ran on plus the rewrite stream.
#[derive(Debug, Serialize)]
pub struct NormalizeReport {
    pub audit: AuditReport,
    pub corrections: Vec<Correction>,
}

impl NormalizeReport {
    pub fn changed_count(&self) -> usize {
        self.corrections
            .iter()
            .filter(|correction| correction.changed())
            .count()
    }
}
