use crate::common::{BROKEN_SCHEMA, HUB_SCHEMA, ROOT_ARRAY_SCHEMA, SIMPLE_SCHEMA, Workspace};
use predicates::prelude::*;

#[test]
fn test_generate_simple_schema_to_stdout() {
    let ws = Workspace::new();
    ws.write("schema.json", SIMPLE_SCHEMA);

    ws.confgen()
        .args(["generate", "schema.json"])
        .assert()
        .success()
        .stdout("# Sample name\nname: \"\"\ncount: 3\n");
}

#[test]
fn test_generate_root_array_with_reference() {
    let ws = Workspace::new();
    ws.write("schema.json", ROOT_ARRAY_SCHEMA);

    ws.confgen()
        .args(["generate", "schema.json"])
        .assert()
        .success()
        .stdout("-\n  a:\n");
}

#[test]
fn test_generate_yaml_schema() {
    let ws = Workspace::new();
    ws.write("hub.yaml", HUB_SCHEMA);

    let assert = ws.confgen().args(["generate", "hub.yaml"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("# Track hub configuration\nhub:\n"));
    assert!(stdout.contains("\n  # Short label shown in the browser track list\n  short_label: \"\"\n"));
    assert!(stdout.contains("  genome: hg19\n"));
    assert!(stdout.contains("tracks:\n  -\n"));
    assert!(stdout.contains("    # options for \"visibility\" are:\n    # - \"hide\"\n"));
    assert!(stdout.contains("    visibility: dense\n"));

    let parsed: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(parsed["hub"]["genome"].as_str(), Some("hg19"));
    assert_eq!(parsed["tracks"][0]["visibility"].as_str(), Some("dense"));
    assert_eq!(parsed["colors"]["up"].as_str(), Some("255,0,0"));
}

#[test]
fn test_generate_from_stdin() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["generate", "-"])
        .write_stdin(SIMPLE_SCHEMA)
        .assert()
        .success()
        .stdout(predicate::str::contains("count: 3"));
}

#[test]
fn test_generate_to_output_file() {
    let ws = Workspace::new();
    ws.write("schema.json", SIMPLE_SCHEMA);

    ws.confgen()
        .args(["generate", "schema.json", "-o", "out/config.yaml"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Generated:"));

    assert_eq!(ws.read("out/config.yaml"), "# Sample name\nname: \"\"\ncount: 3\n");
}

#[test]
fn test_generate_quiet_suppresses_messages() {
    let ws = Workspace::new();
    ws.write("schema.json", SIMPLE_SCHEMA);

    ws.confgen()
        .args(["generate", "schema.json", "-o", "config.yaml", "-q"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_generate_directory_into_out_dir() {
    let ws = Workspace::new();
    ws.write("schemas/simple.json", SIMPLE_SCHEMA);
    ws.write("schemas/nested/hub.yaml", HUB_SCHEMA);
    ws.write("schemas/README.md", "not a schema");

    ws.confgen()
        .args(["generate", "schemas", "--out-dir", "generated"])
        .assert()
        .success();

    assert!(ws.exists("generated/simple.example.yaml"));
    assert!(ws.exists("generated/hub.example.yaml"));
    assert!(!ws.exists("generated/README.example.yaml"));
}

#[test]
fn test_generate_multiple_inputs_require_out_dir() {
    let ws = Workspace::new();
    ws.write("a.json", SIMPLE_SCHEMA);
    ws.write("b.json", ROOT_ARRAY_SCHEMA);

    ws.confgen()
        .args(["generate", "a.json", "b.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out-dir"));
}

#[test]
fn test_generate_include_filter() {
    let ws = Workspace::new();
    ws.write("schemas/a.json", SIMPLE_SCHEMA);
    ws.write("schemas/b.yaml", HUB_SCHEMA);

    ws.confgen()
        .args(["generate", "schemas", "-d", "out", "--include", "*.json"])
        .assert()
        .success();

    assert!(ws.exists("out/a.example.yaml"));
    assert!(!ws.exists("out/b.example.yaml"));
}

#[test]
fn test_generate_reports_problems_as_warnings() {
    let ws = Workspace::new();
    ws.write("broken.json", BROKEN_SCHEMA);

    ws.confgen()
        .args(["generate", "broken.json"])
        .assert()
        .success()
        .stdout("tracks:\n  -\nlabels:\n  -\nname: \"\"\n")
        .stderr(
            predicate::str::contains("unresolved reference \"#/definitions/missing\"")
                .and(predicate::str::contains("labels: array has no \"items\" schema")),
        );
}

#[test]
fn test_generate_strict_fails_without_writing() {
    let ws = Workspace::new();
    ws.write("broken.json", BROKEN_SCHEMA);

    ws.confgen()
        .args(["generate", "broken.json", "-o", "out.yaml", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 schema problem(s) found"));

    assert!(!ws.exists("out.yaml"));
}

#[test]
fn test_generate_width_flag() {
    let ws = Workspace::new();
    ws.write(
        "schema.json",
        r#"{"properties": {"a": {"description": "one two three four five six", "type": "integer"}}}"#,
    );

    ws.confgen()
        .args(["generate", "schema.json", "--width", "10"])
        .assert()
        .success()
        .stdout("# one two\n# three four\n# five six\na:\n");
}

#[test]
fn test_generate_compact_flag() {
    let ws = Workspace::new();
    ws.write(
        "schema.json",
        r#"{"properties": {"a": {"description": "First"}, "b": {"description": "Second"}}}"#,
    );

    ws.confgen()
        .args(["generate", "schema.json", "--compact"])
        .assert()
        .success()
        .stdout("# First\na:\n# Second\nb:\n");
}

#[test]
fn test_generate_uses_config_file() {
    let ws = Workspace::new();
    ws.write_config("compact: true\n");
    ws.write(
        "schema.json",
        r#"{"properties": {"a": {"description": "First"}, "b": {"description": "Second"}}}"#,
    );

    ws.confgen()
        .args(["generate", "schema.json"])
        .assert()
        .success()
        .stdout("# First\na:\n# Second\nb:\n");
}

#[test]
fn test_generate_missing_file() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["generate", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read schema"));
}

#[test]
fn test_generate_invalid_schema() {
    let ws = Workspace::new();
    ws.write("bad.json", "{\"type\": ");

    ws.confgen()
        .args(["generate", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schema"));
}
