//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rolekeeper(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rolekeeper").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--store")
        .arg(dir.join("roles.json"));
    cmd
}

fn seeded(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        rolekeeper(dir.path()).args(["create", name]).assert().success();
    }
    dir
}

// ── user errors (2) ───────────────────────────────────────────────────────────

#[test]
fn test_error_blank_name() {
    let dir = TempDir::new().unwrap();
    rolekeeper(dir.path())
        .args(["create", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("role name cannot be blank"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_reserved_names() {
    let dir = TempDir::new().unwrap();
    for name in ["system", "Root", "sys_backup", "internal_jobs"] {
        rolekeeper(dir.path())
            .args(["create", name])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("is reserved"));
    }
}

#[test]
fn test_error_name_too_long() {
    let dir = TempDir::new().unwrap();
    let long = "x".repeat(101);
    rolekeeper(dir.path())
        .args(["create", &long])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("the maximum is 100"));

    let exact = "y".repeat(100);
    rolekeeper(dir.path())
        .args(["create", &exact])
        .assert()
        .success();
}

#[test]
fn test_error_non_positive_id() {
    let dir = seeded(&["ops"]);
    rolekeeper(dir.path())
        .args(["get", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_error_blank_search_pattern() {
    let dir = seeded(&["ops"]);
    rolekeeper(dir.path())
        .args(["list", "--search", " "])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_error_delete_declined() {
    let dir = seeded(&["temp"]);
    rolekeeper(dir.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));

    rolekeeper(dir.path())
        .arg("count")
        .assert()
        .success()
        .stdout("1\n");
}

// ── not found (3) ─────────────────────────────────────────────────────────────

#[test]
fn test_error_unknown_id() {
    let dir = seeded(&["ops"]);
    for args in [
        ["get", "42", ""],
        ["update", "42", "new"],
        ["delete", "42", "--yes"],
    ] {
        let args: Vec<&str> = args.into_iter().filter(|a| !a.is_empty()).collect();
        rolekeeper(dir.path())
            .args(&args)
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("Role #42 not found"));
    }
}

#[test]
fn test_error_unknown_name() {
    let dir = seeded(&["ops"]);
    rolekeeper(dir.path())
        .args(["find", "ghost"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("'GHOST'"));
}

// ── conflicts (5) ─────────────────────────────────────────────────────────────

#[test]
fn test_error_duplicate_name() {
    let dir = seeded(&["ops team"]);
    rolekeeper(dir.path())
        .args(["create", "  OPS    team"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("A role named 'OPS TEAM' already exists"));
}

#[test]
fn test_error_rename_onto_taken_name() {
    let dir = seeded(&["ops", "qa"]);
    rolekeeper(dir.path())
        .args(["update", "2", "Ops"])
        .assert()
        .failure()
        .code(5);
}

// ── forbidden (6) ─────────────────────────────────────────────────────────────

#[test]
fn test_error_system_role_is_read_only() {
    let dir = seeded(&["admin"]);

    rolekeeper(dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains(
            "'ADMIN' is a system role and cannot be deleted",
        ));

    rolekeeper(dir.path())
        .args(["update", "1", "administrators"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("cannot be updated"));

    rolekeeper(dir.path())
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("read-only"));
}

// ── configuration (4) and internal (1) ───────────────────────────────────────

#[test]
fn test_error_missing_config_file() {
    let dir = TempDir::new().unwrap();
    rolekeeper(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("count")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_invalid_config_value() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[policy]\nmax_length = \"lots\"\n").unwrap();

    rolekeeper(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("count")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_error_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    rolekeeper(dir.path())
        .args(["config", "get", "storage.colour"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("storage.colour"));
}

#[test]
fn test_error_corrupted_store() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roles.json"), "{ not json").unwrap();

    rolekeeper(dir.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupted"));
}

// ── rendering ─────────────────────────────────────────────────────────────────

#[test]
fn test_error_json_output() {
    let dir = seeded(&["ops"]);
    rolekeeper(dir.path())
        .args(["--output-format", "json", "create", "ops"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains(r#""category":"conflict""#))
        .stderr(predicate::str::contains(r#""exit_code":5"#));
}

#[test]
fn test_error_verbose_hides_hint() {
    let dir = TempDir::new().unwrap();
    rolekeeper(dir.path())
        .args(["create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose for more details"));

    rolekeeper(dir.path())
        .args(["-v", "create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose for more details").not());
}

#[test]
fn test_error_bad_arguments() {
    let dir = TempDir::new().unwrap();
    rolekeeper(dir.path())
        .args(["get", "abc"])
        .assert()
        .failure()
        .code(2);
}
