/// End-to-end tests for the binary surface.
///
/// These tests never reach the network: they exercise the configuration
/// failure paths that fire before any request is made.
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn command() -> Command {
    Command::cargo_bin("boost-sbom-export").unwrap()
}

#[test]
fn test_extract_without_token_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    command()
        .current_dir(temp.path())
        .env_remove("BOOST_API_TOKEN")
        .arg("extract")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("BOOST_API_TOKEN"));
}

#[test]
fn test_list_resources_without_token_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    command()
        .current_dir(temp.path())
        .env_remove("BOOST_API_TOKEN")
        .arg("list-resources")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("BOOST_API_TOKEN"));
}

#[test]
fn test_extract_without_catalog_points_at_list_resources() {
    let temp = TempDir::new().unwrap();

    command()
        .current_dir(temp.path())
        .env("BOOST_API_TOKEN", "dummy-token")
        .arg("extract")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Resource catalog not found"))
        .stderr(predicate::str::contains("list-resources"));
}

#[test]
fn test_help_lists_both_subcommands() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list-resources"))
        .stdout(predicate::str::contains("extract"));
}

#[test]
fn test_unknown_subcommand_is_invalid_arguments() {
    command().arg("frobnicate").assert().failure().code(2);
}
