//! Rendering tests: the configuration is shown to users and handed to build tools.

use evmenv_config::{
    profiles::{development, production, staging, PLACEHOLDER_PRIVATE_KEY},
    secret::REDACTED,
};
use serde_json::Value;

#[test]
fn test_json_uses_build_tool_field_names() {
    let config = staging(&[("STAGE_CHAIN_ID", "5")]);
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["environment"], "staging");
    assert_eq!(json["networks"]["stage"]["chainId"].as_u64(), Some(5));
    assert_eq!(json["networks"]["stage"]["kind"], "staging-node");
    assert_eq!(json["networks"]["stage"]["timeout"].as_u64(), Some(60_000));
    assert_eq!(json["networks"]["stage"]["gasPrice"], "auto");
    assert_eq!(json["testRunner"]["timeout"].as_u64(), Some(60_000));
    assert_eq!(json["reporting"]["outputFile"], "gas-report.txt");
    assert_eq!(json["compiler"]["version"], "0.8.20");
    assert_eq!(json["compiler"]["optimizer"]["runs"].as_u64(), Some(1000));
    // The in-process simulator has no endpoint.
    assert!(json["networks"]["hardhat"].get("url").is_none());
}

#[test]
fn test_secrets_are_redacted() {
    let dev = development(&());
    let rendered = serde_json::to_string(&dev).unwrap();
    assert!(!rendered.contains(PLACEHOLDER_PRIVATE_KEY));

    let json: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["networks"]["localhost"]["accounts"][0], REDACTED);

    let phrase = "test test test test test test test test test test test junk";
    let stage = staging(&[("TEST_MNEMONIC", phrase)]);
    let json = serde_json::to_value(&stage).unwrap();
    assert_eq!(json["networks"]["stage"]["accounts"]["mnemonic"], REDACTED);
}

#[test]
fn test_production_rendering() {
    let config = production(&[("GAS_PRICE", "25000000000"), ("ETHERSCAN_API_KEY", "abc")]);
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["compiler"]["viaIR"], true);
    assert_eq!(json["compiler"]["evmVersion"], "paris");
    assert_eq!(json["networks"]["mainnet"]["gasPrice"].as_u64(), Some(25_000_000_000));
    assert_eq!(json["networks"]["mainnet"]["accounts"], Value::Array(vec![]));
    assert_eq!(json["networks"]["mainnet"]["verifyApiKey"], "abc");
    assert_eq!(json["networks"]["localhost"]["accounts"], "remote");
    assert_eq!(json["typechain"]["target"], "ethers-v6");
    assert_eq!(json["logger"]["timestamp"], true);
    assert_eq!(json["envFile"], ".env.prod");
}

#[test]
fn test_toml_rendering() {
    let rendered = toml::to_string(&development(&())).unwrap();

    assert!(rendered.contains("environment = \"development\""));
    assert!(rendered.contains("[networks.localhost]"));
    assert!(rendered.contains("chainId = 1337"));
    assert!(!rendered.contains(PLACEHOLDER_PRIVATE_KEY));
}
