use assert_cmd::Command;

const DOC: &str = r#"[{"id":"A","parentIds":[]},{"id":"B","parentIds":["A"]}]"#;

fn cli() -> Command {
    Command::cargo_bin("terrace-cli").expect("binary should build")
}

fn stdout_json(assert: assert_cmd::assert::Assert) -> serde_json::Value {
    let out = assert.get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout should be JSON")
}

#[test]
fn lays_out_a_document_from_stdin() {
    let assert = cli().write_stdin(DOC).assert().success();
    let value = stdout_json(assert);
    assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(value["edges"].as_array().unwrap().len(), 1);
    assert_eq!(value["width"], 320.0);
    assert_eq!(value["height"], 460.0);
}

#[test]
fn lays_out_a_document_from_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graph.json");
    std::fs::write(&path, DOC).expect("write fixture");

    let assert = cli().arg(path.to_str().unwrap()).assert().success();
    let value = stdout_json(assert);
    assert_eq!(value["nodes"][0]["id"], "A");
}

#[test]
fn dimension_flags_override_the_document_config() {
    let assert = cli()
        .args(["--node-width", "100", "--node-height", "40"])
        .write_stdin(DOC)
        .assert()
        .success();
    let value = stdout_json(assert);
    assert_eq!(value["width"], 300.0);
    assert_eq!(value["height"], 420.0);
}

#[test]
fn pretty_prints_multiline_json() {
    let assert = cli().arg("--pretty").write_stdin(DOC).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(out.lines().count() > 1);
}

#[test]
fn out_flag_writes_the_result_to_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("layout.json");

    cli()
        .args(["--out", out_path.to_str().unwrap()])
        .write_stdin(DOC)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out_path).expect("output file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["edges"][0]["source"], "A");
}

#[test]
fn invalid_json_fails_with_a_decode_error() {
    let assert = cli().write_stdin("[{").assert().failure().code(1);
    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("Invalid graph JSON"), "stderr: {err}");
}

#[test]
fn unknown_flags_print_usage() {
    let assert = cli().arg("--bogus").assert().failure().code(2);
    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("USAGE"), "stderr: {err}");
}
