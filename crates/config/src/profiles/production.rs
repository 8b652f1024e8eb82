// evmenv - Environment Configuration for EVM Projects
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use evmenv_common::env::{GAS_PRICE, HARDHAT_NETWORK_URL, MAINNET_RPC_URL, PROD_PRIVATE_KEY};
use foundry_compilers::artifacts::EvmVersion;

use super::*;
use crate::{
    dotenv, network, CompilerConfig, Environment, EnvironmentConfig, ForkingConfig,
    GasReporterConfig, GasSetting, LoggerConfig, NetworkConfig, NetworkKind, ProjectPaths,
    TestRunnerConfig, TypechainConfig,
};

const NODE_TIMEOUT: Duration = Duration::from_secs(120);

/// Production configuration: mainnet deployments with strict optimizer settings.
///
/// Credentials come only from the source. Without `PROD_PRIVATE_KEY` the mainnet
/// network has an empty key list.
pub fn production(source: &impl EnvSource) -> EnvironmentConfig {
    let environment = Environment::Production;
    let mainnet_url = string_or(source, MAINNET_RPC_URL, "");

    let mut hardhat = NetworkConfig::simulator(SIMULATOR_CHAIN_ID);
    hardhat.forking =
        Some(ForkingConfig { enabled: !mainnet_url.is_empty(), url: mainnet_url.clone() });

    let localhost = NetworkConfig::remote(
        NetworkKind::LocalNode,
        string_or(source, HARDHAT_NETWORK_URL, DEFAULT_LOCAL_URL),
    )
    .with_timeout(NODE_TIMEOUT);

    let accounts = match source.non_empty(PROD_PRIVATE_KEY) {
        Some(key) => Accounts::private_key(Secret::new(key)),
        None => Accounts::PrivateKeys(Vec::new()),
    };
    let verification = verification(source);

    let mut mainnet = NetworkConfig::remote(NetworkKind::ProductionNode, mainnet_url)
        .with_chain_id(Some(MAINNET_CHAIN_ID))
        .with_accounts(accounts)
        .with_timeout(NODE_TIMEOUT)
        .with_gas_multiplier(1.1);
    // A zero price means "let the client decide".
    mainnet.gas_price = parse_uint(source, GAS_PRICE)
        .filter(|price| *price != 0)
        .map_or(GasSetting::Auto, GasSetting::Fixed);
    mainnet.verify_api_key = Some(verification.api_key.clone());

    let networks = BTreeMap::from([
        (network::HARDHAT.to_string(), hardhat),
        (network::LOCALHOST.to_string(), localhost),
        (network::MAINNET.to_string(), mainnet),
    ]);

    EnvironmentConfig {
        environment,
        env_file: dotenv::env_file_for(environment, source),
        compiler: CompilerConfig {
            via_ir: true,
            evm_version: Some(EvmVersion::Paris),
            ..CompilerConfig::optimized(SOLC_VERSION, 2000)
        },
        networks,
        paths: ProjectPaths::new("./cache-prod", "./artifacts-prod"),
        test_runner: TestRunnerConfig { timeout: NODE_TIMEOUT },
        reporting: GasReporterConfig {
            enabled: true,
            currency: GAS_REPORT_CURRENCY.to_string(),
            output_file: Some(PathBuf::from("gas-report-prod.txt")),
            no_colors: true,
        },
        verification,
        typechain: Some(TypechainConfig {
            out_dir: PathBuf::from("typechain"),
            target: "ethers-v6".to_string(),
        }),
        logger: Some(LoggerConfig { timestamp: true }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = production(&());

        let mainnet = config.network(network::MAINNET).unwrap();
        assert_eq!(mainnet.url.as_deref(), Some(""));
        assert_eq!(mainnet.chain_id, Some(MAINNET_CHAIN_ID));
        assert_eq!(mainnet.timeout, Some(NODE_TIMEOUT));
        assert_eq!(mainnet.gas_price, GasSetting::Auto);
        assert_eq!(mainnet.accounts, Accounts::PrivateKeys(Vec::new()));

        let localhost = config.network(network::LOCALHOST).unwrap();
        assert_eq!(localhost.endpoint(), Some(DEFAULT_LOCAL_URL));
        assert_eq!(localhost.chain_id, None);

        let forking = config.network(network::HARDHAT).unwrap().forking.as_ref().unwrap();
        assert!(!forking.enabled);

        assert_eq!(config.compiler.optimizer.runs, 2000);
        assert!(config.compiler.via_ir);
        assert_eq!(config.compiler.evm_version, Some(EvmVersion::Paris));
        assert_eq!(config.paths.artifacts, PathBuf::from("./artifacts-prod"));
        assert!(config.typechain.is_some());
    }

    #[test]
    fn test_mainnet_url_enables_forking() {
        let config = production(&[("MAINNET_RPC_URL", "https://eth.example.org")]);

        let forking = config.network(network::HARDHAT).unwrap().forking.clone().unwrap();
        assert!(forking.enabled);
        assert_eq!(forking.url, "https://eth.example.org");
        assert_eq!(
            config.network(network::MAINNET).unwrap().endpoint(),
            Some("https://eth.example.org")
        );
    }

    #[test]
    fn test_gas_price_override() {
        let fixed = production(&[("GAS_PRICE", "30000000000")]);
        assert_eq!(
            fixed.network(network::MAINNET).unwrap().gas_price,
            GasSetting::Fixed(30_000_000_000)
        );

        let invalid = production(&[("GAS_PRICE", "cheap")]);
        assert_eq!(invalid.network(network::MAINNET).unwrap().gas_price, GasSetting::Auto);
    }

    #[test]
    fn test_zero_gas_price_is_auto() {
        let zero = production(&[("GAS_PRICE", "0")]);
        assert_eq!(zero.network(network::MAINNET).unwrap().gas_price, GasSetting::Auto);

        let hex_zero = production(&[("GAS_PRICE", "0x0")]);
        assert_eq!(hex_zero.network(network::MAINNET).unwrap().gas_price, GasSetting::Auto);
    }

    #[test]
    fn test_never_uses_placeholder_key() {
        let source = [("TEST_PRIVATE_KEY", PLACEHOLDER_PRIVATE_KEY)];
        let config = production(&source);

        for network in config.networks.values() {
            assert!(network
                .accounts
                .private_keys()
                .iter()
                .all(|key| key.expose() != PLACEHOLDER_PRIVATE_KEY));
        }
    }
}
