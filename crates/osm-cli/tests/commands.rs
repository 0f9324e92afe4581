//! Tests for command implementations against on-disk OSM files.

use std::fs;
use std::io::Write;

use osm_cli::commands::{load_config, run_audits, run_keys, run_normalize};
use osm_model::KeyCategory;

const SAMPLE: &str = r#"<osm>
  <node id="1">
    <tag k="addr:postcode" v="2000"/>
    <tag k="addr:street" v="West Lexington St."/>
    <tag k="is_in:state_code" v="NSW"/>
  </node>
  <way id="2">
    <tag k="addr:street" v="Baldwin Rd."/>
    <tag k="addr:street" v="Main Street"/>
    <tag k="addr:state" v="200"/>
  </way>
</osm>"#;

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");
    file
}

#[test]
fn runs_every_audit_by_default() {
    let file = sample_file();
    let config = load_config(None).expect("builtin config");
    let reports = run_audits(file.path(), &[], &config).expect("run audits");

    let names: Vec<&str> = reports.iter().map(|r| r.audit.as_str()).collect();
    assert_eq!(names, vec!["postcode", "state-digits", "state", "street"]);
    let state = &reports[2];
    assert!(state.result.is_empty());
    assert_eq!(state.records_seen, 1);
}

#[test]
fn runs_selected_audits_in_requested_order() {
    let file = sample_file();
    let config = load_config(None).expect("builtin config");
    let names = vec!["street".to_string(), "postcode".to_string()];
    let reports = run_audits(file.path(), &names, &config).expect("run audits");

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].audit, "street");
    assert_eq!(reports[0].result.tokens().collect::<Vec<_>>(), vec!["Rd.", "St."]);
    assert_eq!(reports[1].result.tokens().collect::<Vec<_>>(), vec!["2000"]);
}

#[test]
fn unknown_audit_is_an_error() {
    let file = sample_file();
    let config = load_config(None).expect("builtin config");
    let error = run_audits(file.path(), &["suburb".to_string()], &config)
        .expect_err("unknown audit");
    assert!(error.to_string().contains("unknown audit 'suburb'"));
}

#[test]
fn normalize_rewrites_street_suffixes() {
    let file = sample_file();
    let config = load_config(None).expect("builtin config");
    let report = run_normalize(file.path(), "street", &config).expect("normalize");

    assert_eq!(report.changed_count(), 2);
    let corrected: Vec<&str> = report
        .corrections
        .iter()
        .map(|c| c.corrected.as_str())
        .collect();
    assert_eq!(corrected, vec!["Baldwin Road", "West Lexington Street"]);
}

#[test]
fn config_file_overrides_builtin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("audits.toml");
    fs::write(
        &config_path,
        r#"
[[audit]]
name = "street"
target_key = "addr:street"
pattern = "trailing-word"
vocabulary = ["Street"]

[audit.corrections]
"Rd." = "Road"
"#,
    )
    .expect("write config");

    let file = sample_file();
    let config = load_config(Some(&config_path)).expect("load config");
    let report = run_normalize(file.path(), "street", &config).expect("normalize");

    // St. has no correction in this config, so only Rd. is rewritten.
    assert_eq!(report.changed_count(), 1);
}

#[test]
fn missing_config_names_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let error = load_config(Some(&path)).expect_err("missing config");
    assert!(format!("{error:#}").contains("absent.toml"));
}

#[test]
fn missing_osm_file_aborts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = load_config(None).expect("builtin config");
    let error = run_audits(&dir.path().join("absent.osm"), &[], &config)
        .expect_err("missing osm file");
    assert!(format!("{error:#}").contains("failed to open OSM source"));
}

#[test]
fn keys_counts_categories() {
    let file = sample_file();
    let counts = run_keys(file.path()).expect("scan keys");
    assert_eq!(counts.get(KeyCategory::LowerColon), 6);
    assert_eq!(counts.total(), 6);
}
