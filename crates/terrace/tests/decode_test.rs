use terrace::decode::{Error, decode_document};
use terrace::{LayoutConfig, NodeKind};

#[test]
fn bare_array_decodes_as_nodes_without_config() {
    let doc = decode_document(
        r#"[
            {"id": "A", "parentIds": []},
            {"id": "B", "parentIds": ["A"], "label": "second", "type": "decision"}
        ]"#,
    )
    .expect("document should decode");

    assert_eq!(doc.nodes.len(), 2);
    assert!(doc.config.is_none());
    assert_eq!(doc.nodes[1].parent_ids, vec!["A"]);
    assert_eq!(doc.nodes[1].label.as_deref(), Some("second"));
    assert_eq!(doc.nodes[1].kind, Some(NodeKind::Decision));
}

#[test]
fn missing_parent_ids_default_to_empty() {
    let doc = decode_document(r#"[{"id": "solo"}]"#).expect("document should decode");
    assert!(doc.nodes[0].parent_ids.is_empty());
}

#[test]
fn wrapper_object_carries_nodes_and_config() {
    let doc = decode_document(
        r#"{
            "nodes": [{"id": "A", "parentIds": []}],
            "config": {"nodeWidth": 100, "rankSep": 40}
        }"#,
    )
    .expect("document should decode");

    // Partial configs fill the remaining fields from the defaults.
    let config = doc.config.expect("config should be present");
    assert_eq!(config.node_width, 100.0);
    assert_eq!(config.rank_sep, 40.0);
    assert_eq!(config.node_height, LayoutConfig::default().node_height);
    assert_eq!(config.node_sep, LayoutConfig::default().node_sep);
}

#[test]
fn wrapper_object_without_config_decodes() {
    let doc = decode_document(r#"{"nodes": []}"#).expect("document should decode");
    assert!(doc.nodes.is_empty());
    assert!(doc.config.is_none());
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = decode_document("[{").expect_err("should fail");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn unknown_kind_tag_is_a_json_error() {
    let err = decode_document(r#"[{"id": "A", "type": "banana"}]"#).expect_err("should fail");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn non_document_shapes_are_rejected() {
    for input in ["42", "\"nodes\"", "{\"config\": {}}", "null"] {
        let err = decode_document(input).expect_err("should fail");
        assert!(matches!(err, Error::UnexpectedShape), "input: {input}");
    }
}
