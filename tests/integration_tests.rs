use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_invalid_json_file() {
    let fixture = fixture_path("invalid.json");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid items"));
}

#[test]
fn test_cli_with_object_instead_of_array() {
    cargo_bin_cmd!()
        .arg(fixture_path("not_a_list.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid items"));
}

#[test]
fn test_cli_with_invalid_stdin() {
    cargo_bin_cmd!()
        .write_stdin("label: Apple")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid items"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.json")
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_non_numeric_min_chars() {
    cargo_bin_cmd!()
        .arg("--min-chars")
        .arg("many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min-chars"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive picker"))
        .stdout(predicate::str::contains("--debounce-ms"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("typeahead"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("items.json").exists());
    assert!(fixture_path("invalid.json").exists());
    assert!(fixture_path("not_a_list.json").exists());
}

#[test]
fn test_items_fixture_parses() {
    let content = fs::read_to_string(fixture_path("items.json")).unwrap();
    let items = typeahead::item::parse_items(&content).unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items[3].id, typeahead::ItemId::Str("luke".to_string()));
    assert_eq!(items[0].id, typeahead::ItemId::Int(1));
}
