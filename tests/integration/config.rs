use crate::common::{SIMPLE_SCHEMA, Workspace};
use predicates::prelude::*;

#[test]
fn test_config_no_subcommand_shows_help() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validate").and(predicate::str::contains("schema")));
}

#[test]
fn test_config_validate_without_file() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["config", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn test_config_validate_success() {
    let ws = Workspace::new();
    ws.write_config("wrap_width: 60\nstrict: true\n");

    ws.confgen()
        .args(["config", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("valid"));
}

#[test]
fn test_config_validate_invalid_values() {
    let ws = Workspace::new();
    ws.write_config("wrap_width: 2\nmax_ref_depth: 0\n");

    ws.confgen()
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("wrap_width")
                .and(predicate::str::contains("max_ref_depth")),
        );
}

#[test]
fn test_invalid_config_fails_generate() {
    let ws = Workspace::new();
    ws.write_config("wrap_width: [\n");
    ws.write("schema.json", SIMPLE_SCHEMA);

    ws.confgen()
        .args(["generate", "schema.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_config_schema_is_json() {
    let ws = Workspace::new();

    let assert = ws.confgen().args(["config", "schema"]).assert().success();
    let schema: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert!(schema["properties"]["wrap_width"].is_object());
}

#[test]
fn test_config_new_then_validate() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["config", "new"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created:"));

    let text = ws.read(".confgen.yaml");
    assert!(text.contains("wrap_width: 70"));
    assert!(text.contains("# Width of description comments"));

    ws.confgen().args(["config", "validate"]).assert().success();
}

#[test]
fn test_config_new_refuses_existing() {
    let ws = Workspace::new();
    ws.write_config("strict: true\n");

    ws.confgen()
        .args(["config", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ws.confgen()
        .args(["config", "new", "--override"])
        .assert()
        .success();
}

#[test]
fn test_config_new_global() {
    let ws = Workspace::new();

    ws.confgen().args(["config", "new", "--global"]).assert().success();

    ws.confgen()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml").and(predicate::str::contains("wrap_width: 70")));
}

#[test]
fn test_config_show_reflects_file() {
    let ws = Workspace::new();
    ws.write_config("compact: true\n");

    ws.confgen()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(".confgen.yaml").and(predicate::str::contains("compact: true")),
        );
}

#[test]
fn test_completions_and_man() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confgen"));

    ws.confgen()
        .args(["man"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confgen"));
}

#[test]
fn test_man_pages_to_directory() {
    let ws = Workspace::new();

    ws.confgen()
        .args(["man", "--out-dir", "man"])
        .assert()
        .success();

    assert!(ws.exists("man/confgen.1"));
    assert!(ws.exists("man/confgen-generate.1"));
}
