//! Command implementations, independent of argument parsing.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use osm_audit::{AuditConfig, AuditReport, audit_file, normalize_result};
use osm_ingest::scan_key_types;
use osm_model::KeyTypeCounts;

use crate::types::NormalizeReport;

/// Built-in audits, overlaid with the given TOML file when present.
pub fn load_config(path: Option<&Path>) -> Result<AuditConfig> {
    match path {
        Some(path) => AuditConfig::load(path)
            .with_context(|| format!("load audit config {}", path.display())),
        None => Ok(AuditConfig::builtin()),
    }
}

/// Run the named audits (all configured audits when `names` is empty), one pass each.
pub fn run_audits(
    osm_file: &Path,
    names: &[String],
    config: &AuditConfig,
) -> Result<Vec<AuditReport>> {
    let specs = if names.is_empty() {
        config.iter().collect::<Vec<_>>()
    } else {
        names
            .iter()
            .map(|name| config.require(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    let start = Instant::now();
    let mut reports = Vec::with_capacity(specs.len());
    for spec in specs {
        let report = audit_file(osm_file, spec)
            .with_context(|| format!("run audit '{}' on {}", spec.name, osm_file.display()))?;
        reports.push(report);
    }
    info!(
        audits = reports.len(),
        duration_ms = start.elapsed().as_millis(),
        "audits complete"
    );
    Ok(reports)
}

/// Audit `osm_file` with one audit and rewrite every flagged value.
pub fn run_normalize(
    osm_file: &Path,
    name: &str,
    config: &AuditConfig,
) -> Result<NormalizeReport> {
    let spec = config.require(name)?;
    let span = info_span!("normalize", audit = %spec.name);
    let _guard = span.enter();

    let audit = audit_file(osm_file, spec)
        .with_context(|| format!("run audit '{}' on {}", spec.name, osm_file.display()))?;
    let corrections = normalize_result(&audit.result, spec)
        .with_context(|| format!("normalize values for audit '{}'", spec.name))?;
    let report = NormalizeReport { audit, corrections };
    info!(
        values = report.corrections.len(),
        changed = report.changed_count(),
        "normalization complete"
    );
    Ok(report)
}

pub fn run_keys(osm_file: &Path) -> Result<KeyTypeCounts> {
    scan_key_types(osm_file).with_context(|| format!("scan tag keys in {}", osm_file.display()))
}
