//! Tests for streaming tag extraction.

use std::io::Write;

use osm_ingest::{IngestError, TagReader};
use osm_model::{OwnerKind, TagRecord};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="test">
  <bounds minlat="-33.9" minlon="151.1" maxlat="-33.8" maxlon="151.3"/>
  <node id="1" lat="-33.86" lon="151.20">
    <tag k="addr:postcode" v="2000"/>
    <tag k="addr:street" v="George Street"/>
  </node>
  <node id="2" lat="-33.87" lon="151.21"/>
  <node id="3" lat="-33.88" lon="151.22">
    <tag k="addr:street" v="West Lexington St."/>
    <tag v="no key here"/>
    <tag k="addr:street"/>
  </node>
  <way id="10">
    <nd ref="1"/>
    <nd ref="3"/>
    <tag k="addr:street" v="Baldwin Rd."/>
    <tag k="highway" v="residential"/>
  </way>
  <relation id="20">
    <member type="way" ref="10" role="outer"/>
    <tag k="addr:street" v="Relation Avenue"/>
  </relation>
</osm>
"#;

fn write_sample(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write sample");
    file
}

#[test]
fn yields_only_node_and_way_tags_for_target_key() {
    let file = write_sample(SAMPLE);
    let reader = TagReader::open(file.path(), "addr:street").expect("open sample");
    let records: Vec<TagRecord> = reader.collect::<Result<_, _>>().expect("read records");

    assert_eq!(
        records,
        vec![
            TagRecord::new(OwnerKind::Node, "addr:street", "George Street"),
            TagRecord::new(OwnerKind::Node, "addr:street", "West Lexington St."),
            TagRecord::new(OwnerKind::Way, "addr:street", "Baldwin Rd."),
        ]
    );
}

#[test]
fn counts_malformed_tags() {
    let file = write_sample(SAMPLE);
    let mut reader = TagReader::open(file.path(), "addr:street").expect("open sample");
    let count = reader.by_ref().filter_map(Result::ok).count();

    assert_eq!(count, 3);
    assert_eq!(reader.emitted(), 3);
    // One tag without a key and one addr:street without a value.
    assert_eq!(reader.skipped(), 2);
}

#[test]
fn other_keys_are_filtered() {
    let reader = TagReader::from_reader(SAMPLE.as_bytes(), "addr:postcode");
    let values: Vec<String> = reader
        .map(|record| record.expect("read record").value)
        .collect();
    assert_eq!(values, vec!["2000"]);
}

#[test]
fn missing_file_is_unreadable_source() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.osm");
    let error = TagReader::open(&path, "addr:street")
        .err()
        .expect("open should fail");
    match error {
        IngestError::UnreadableSource { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn broken_xml_surfaces_an_error_and_stops() {
    let xml = r#"<osm><node id="1"><tag k="addr:street" v="A Street"/></way></osm>"#;
    let mut reader = TagReader::from_reader(xml.as_bytes(), "addr:street");

    assert_eq!(
        reader.next().expect("first item").expect("first record").value,
        "A Street"
    );
    assert!(matches!(reader.next(), Some(Err(IngestError::Xml { .. }))));
    assert!(reader.next().is_none());
}

#[test]
fn reader_can_be_dropped_early() {
    let file = write_sample(SAMPLE);
    let mut reader = TagReader::open(file.path(), "addr:street").expect("open sample");
    let first = reader.next().expect("first item").expect("first record");
    assert_eq!(first.value, "George Street");
    drop(reader);

    // A fresh pass starts from the beginning again.
    let again = TagReader::open(file.path(), "addr:street").expect("reopen sample");
    assert_eq!(again.count(), 3);
}
