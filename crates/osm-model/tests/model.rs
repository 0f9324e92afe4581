use osm_model::{
    AuditResult, CorrectionTable, KeyCategory, KeyTypeCounts, OwnerKind, TagRecord, Vocabulary,
};

#[test]
fn owner_kind_matches_node_and_way_only() {
    assert_eq!(OwnerKind::from_element_name(b"node"), Some(OwnerKind::Node));
    assert_eq!(OwnerKind::from_element_name(b"way"), Some(OwnerKind::Way));
    assert_eq!(OwnerKind::from_element_name(b"relation"), None);
    assert_eq!(OwnerKind::Way.to_string(), "way");
}

#[test]
fn tag_record_serializes_with_lowercase_owner() {
    let record = TagRecord::new(OwnerKind::Node, "addr:postcode", "2000");
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["owner"], "node");
    assert_eq!(json["key"], "addr:postcode");
    assert_eq!(json["value"], "2000");
}

#[test]
fn vocabulary_deserializes_with_dedup() {
    let vocabulary: Vocabulary =
        serde_json::from_str(r#"["Street", "Road", "Street"]"#).expect("deserialize");
    assert_eq!(vocabulary, Vocabulary::new(["Street", "Road"]));
}

#[test]
fn correction_table_deserializes_from_map() {
    let table: CorrectionTable =
        serde_json::from_str(r#"{"St.": "Street", "Rd.": "Road"}"#).expect("deserialize");
    assert_eq!(table.get("Rd."), Some("Road"));
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        vec![("Rd.", "Road"), ("St.", "Street")]
    );
}

#[test]
fn audit_result_groups_by_token() {
    let mut result = AuditResult::new();
    result.record("St.", "West Lexington St.");
    result.record("Rd.", "Baldwin Rd.");
    result.record("St.", "West Lexington St.");

    assert_eq!(result.len(), 2);
    assert_eq!(result.value_count(), 2);
    assert!(result.contains_token("Rd."));
    assert!(!result.contains_token("Street"));
    let group = result.get("St.").expect("St. group");
    assert!(group.contains("West Lexington St."));
}

#[test]
fn key_counts_serialize_with_category_names() {
    let mut counts = KeyTypeCounts::new();
    counts.increment(KeyCategory::LowerColon);
    let json = serde_json::to_string(&counts).expect("serialize counts");
    assert_eq!(
        json,
        r#"{"lower":0,"lower_colon":1,"problemchars":0,"other":0}"#
    );
}
