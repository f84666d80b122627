//! Integration tests for the deployenv binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with the host signals cleared.
fn deployenv() -> Command {
    let mut cmd = Command::new(cargo_bin("deployenv"));
    cmd.env_remove("SERVER_SOFTWARE")
        .env_remove("CURRENT_VERSION_ID")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn show_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.args(["show", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    deployenv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    deployenv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn app_engine_marker_is_production() {
    let value = show_json(deployenv().env("SERVER_SOFTWARE", "Google App Engine/1.9"));
    assert_eq!(value["environment"], "production");
    assert_eq!(value["is_development"], false);
    assert_eq!(value["is_production"], true);
    assert_eq!(value["is_debug"], false);
}

#[cfg(unix)]
#[test]
fn invalid_utf8_values_are_still_read() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let value = show_json(
        deployenv()
            .env(
                "SERVER_SOFTWARE",
                OsString::from_vec(b"Google App Engine/1.9 \xff".to_vec()),
            )
            .env("CURRENT_VERSION_ID", OsString::from_vec(b"42.\xffabc".to_vec())),
    );
    assert_eq!(value["environment"], "production");
    assert_eq!(value["is_debug"], false);
    assert_eq!(value["current_version_id"], "42.\u{fffd}abc");
}

#[test]
fn clean_environment_is_development() {
    let value = show_json(&mut deployenv());
    assert_eq!(value["is_development"], true);
    assert_eq!(value["is_production"], false);
    assert_eq!(value["is_debug"], true);
    assert!(value["current_version_id"].is_null());
}

#[test]
fn version_id_passes_through() {
    let value = show_json(
        deployenv()
            .env("CURRENT_VERSION_ID", "42.abcdef")
            .env("SERVER_SOFTWARE", "Google App Engine/1.9"),
    );
    assert_eq!(value["current_version_id"], "42.abcdef");
}

#[test]
fn other_server_software_is_development() {
    let value = show_json(deployenv().env("SERVER_SOFTWARE", "nginx"));
    assert_eq!(value["environment"], "development");
    assert_eq!(value["default_query_limit"], 64);
}

#[test]
fn manifest_has_single_stylesheet_in_every_environment() {
    for server in ["Google App Engine/1.9", "nginx", ""] {
        let value = show_json(deployenv().env("SERVER_SOFTWARE", server));
        assert_eq!(
            value["client_asset_manifest"],
            serde_json::json!(["/static/less/style.less"])
        );
    }
}

#[test]
fn no_subcommand_shows_settings() {
    deployenv()
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment:"))
        .stdout(predicate::str::contains("development"));
}

#[test]
fn show_reads_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("host.env");
    fs::write(
        &path,
        "SERVER_SOFTWARE=\"Google App Engine/1.9\"\nCURRENT_VERSION_ID=7.1\n",
    )?;

    deployenv()
        .args(["show", "--json", "--env-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_production\": true"))
        .stdout(predicate::str::contains("\"current_version_id\": \"7.1\""));
    Ok(())
}

#[test]
fn env_file_ignores_process_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("host.env");
    fs::write(&path, "# empty host\n")?;

    deployenv()
        .env("SERVER_SOFTWARE", "Google App Engine/1.9")
        .args(["show", "--json", "--env-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_production\": false"));
    Ok(())
}

#[test]
fn missing_env_file_fails() {
    deployenv()
        .args(["show", "--env-file", "/nonexistent/host.env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("host.env"));
}

#[test]
fn show_yaml_output() {
    deployenv()
        .args(["show", "--yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_query_limit: 64"));
}

#[test]
fn quiet_show_prints_values_only() {
    deployenv()
        .args(["show", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deployment settings").not())
        .stdout(predicate::str::contains("64"));
}

#[test]
fn manifest_prints_paths() {
    deployenv()
        .arg("manifest")
        .assert()
        .success()
        .stdout("/static/less/style.less\n");
}

#[test]
fn manifest_with_root() {
    deployenv()
        .args(["manifest", "--root", "/srv/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/app/static/less/style.less"));
}

#[test]
fn manifest_json() {
    let output = deployenv().args(["manifest", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, ["/static/less/style.less"]);
}

#[test]
fn completions_for_bash() {
    deployenv()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deployenv"));
}
