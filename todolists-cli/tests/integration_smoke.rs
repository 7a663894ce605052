//! Smoke tests for argument parsing and configuration errors
//!
//! None of these reach a database.

use assert_cmd::Command;
use predicates::prelude::*;

fn todolists() -> Command {
    let mut cmd = Command::cargo_bin("todolists").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("APP_ENV")
        .env_remove("RACK_ENV");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    todolists()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-list"))
        .stdout(predicate::str::contains("complete-all"))
        .stdout(predicate::str::contains("delete-todo"));
}

#[test]
fn test_show_help() {
    todolists()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List ID"));
}

#[test]
fn test_blank_title_is_rejected() {
    todolists()
        .args(["create-list", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title cannot be empty"));
}

#[test]
fn test_long_title_is_rejected() {
    let title = "a".repeat(101);
    todolists()
        .args(["add-todo", "1", &title])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 100 characters"));
}

#[test]
fn test_non_numeric_id_is_rejected() {
    todolists()
        .args(["delete-list", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_environment_is_rejected() {
    todolists()
        .args(["--env", "staging", "lists"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment"));
}

#[test]
fn test_production_requires_database_url() {
    todolists()
        .args(["--env", "production", "lists"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL must be set in production"));
}

#[test]
fn test_explicit_database_url_is_used_in_development() {
    // Fails while parsing the url, so the flag was not swapped for the
    // local development database
    todolists()
        .args(["--database-url", "not a url", "lists"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid database url"));
}

#[test]
fn test_explicit_database_url_satisfies_production() {
    todolists()
        .args(["--env", "production", "--database-url", "not a url", "lists"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid database url"))
        .stderr(predicate::str::contains("DATABASE_URL must be set").not());
}
