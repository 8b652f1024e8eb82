use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tracing::info;

/// `evmenv` in an empty directory with a clean environment.
fn evmenv(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("evmenv").unwrap();
    cmd.env_clear().current_dir(dir.path());
    cmd
}

fn show_json(cmd: &mut Command) -> Value {
    let output = cmd.arg("show").assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_help_command() {
    evmenv_common::ensure_test_logging(None);
    info!("Testing CLI help command");

    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment configuration selector"));
}

#[test]
fn test_missing_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_show_defaults_to_development() {
    let dir = tempfile::tempdir().unwrap();
    let json = show_json(&mut evmenv(&dir));

    assert_eq!(json["environment"], "development");
    assert_eq!(json["networks"]["localhost"]["url"], "http://127.0.0.1:8545");
    assert_eq!(json["networks"]["localhost"]["accounts"][0], "<redacted>");
}

#[test]
fn test_show_follows_node_env() {
    let dir = tempfile::tempdir().unwrap();
    let json = show_json(evmenv(&dir).env("NODE_ENV", "stage").env("STAGE_CHAIN_ID", "7"));

    assert_eq!(json["environment"], "staging");
    assert_eq!(json["networks"]["stage"]["chainId"].as_u64(), Some(7));
}

#[test]
fn test_env_flag_overrides_node_env() {
    let dir = tempfile::tempdir().unwrap();
    let json = show_json(evmenv(&dir).env("NODE_ENV", "development").args(["--env", "prod"]));

    assert_eq!(json["environment"], "production");
    assert_eq!(json["envFile"], ".env.prod");
}

#[test]
fn test_show_reads_dotenv_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "STAGE_CHAIN_ID=9\n").unwrap();

    let json = show_json(evmenv(&dir).env("NODE_ENV", "staging"));
    assert_eq!(json["networks"]["stage"]["chainId"].as_u64(), Some(9));
}

#[test]
fn test_show_toml() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .args(["--env", "production", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("environment = \"production\""))
        .stdout(predicate::str::contains("[networks.mainnet]"));
}

#[test]
fn test_solc_settings() {
    let dir = tempfile::tempdir().unwrap();
    let output = evmenv(&dir)
        .args(["--env", "production", "solc-settings"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let settings: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(settings["optimizer"]["enabled"], true);
    assert_eq!(settings["optimizer"]["runs"].as_u64(), Some(2000));
    assert_eq!(settings["viaIR"], true);
    assert_eq!(settings["evmVersion"], "paris");
}

#[test]
fn test_check_local_networks() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .args(["check", "localhost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("localhost: local-node at http://127.0.0.1:8545"));

    evmenv(&dir).args(["check", "hardhat"]).assert().success();
}

#[test]
fn test_check_unknown_network_fails() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .args(["check", "mainnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured for the development environment"));
}

#[test]
fn test_production_without_endpoint_fails() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .args(["--env", "production", "check", "mainnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no RPC endpoint (set MAINNET_RPC_URL)"));

    evmenv(&dir)
        .args(["--env", "production", "deploy", "mainnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no RPC endpoint"));
}

#[test]
fn test_production_without_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .env("MAINNET_RPC_URL", "https://mainnet.example.org")
        .args(["--env", "production", "check", "mainnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROD_PRIVATE_KEY"));
}

#[test]
fn test_deploy_missing_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    evmenv(&dir)
        .args(["deploy", "localhost", "--contract", "Token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read artifact"));
}

#[test]
fn test_deploy_failures_are_logged() {
    let dir = tempfile::tempdir().unwrap();

    // Artifact lookup, the in-process simulator and validation all fail before connecting.
    for args in [
        vec!["deploy", "localhost"],
        vec!["deploy", "hardhat"],
        vec!["--env", "production", "deploy", "mainnet"],
    ] {
        evmenv(&dir)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("deployment failed"));
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = evmenv(&dir)
        .args(["show", "--format", "json", "--env", "prod"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["environment"], "production");
}

#[test]
fn test_development_solc_settings_target_shanghai() {
    let dir = tempfile::tempdir().unwrap();
    let output = evmenv(&dir).arg("solc-settings").assert().success().get_output().stdout.clone();

    let settings: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(settings["optimizer"]["runs"].as_u64(), Some(200));
    assert_eq!(settings["evmVersion"], "shanghai");
}
