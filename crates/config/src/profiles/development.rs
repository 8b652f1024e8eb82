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

use std::{collections::BTreeMap, time::Duration};

use evmenv_common::env::{HARDHAT_NETWORK_URL, REPORT_GAS};

use super::*;
use crate::{
    dotenv, network, CompilerConfig, Environment, EnvironmentConfig, GasReporterConfig,
    MiningConfig, NetworkConfig, NetworkKind, ProjectPaths, TestRunnerConfig,
};

/// Development configuration: local simulator plus a local node with a known test key.
pub fn development(source: &impl EnvSource) -> EnvironmentConfig {
    let environment = Environment::Development;

    let mut hardhat = NetworkConfig::simulator(SIMULATOR_CHAIN_ID);
    hardhat.mining = Some(MiningConfig { auto: true, interval: Duration::ZERO });

    let localhost = NetworkConfig::remote(
        NetworkKind::LocalNode,
        string_or(source, HARDHAT_NETWORK_URL, DEFAULT_LOCAL_URL),
    )
    .with_chain_id(Some(LOCAL_NODE_CHAIN_ID))
    .with_accounts(test_key_accounts(source))
    .with_timeout(Duration::from_secs(30));

    let networks = BTreeMap::from([
        (network::HARDHAT.to_string(), hardhat),
        (network::LOCALHOST.to_string(), localhost),
    ]);

    EnvironmentConfig {
        environment,
        env_file: dotenv::env_file_for(environment, source),
        compiler: CompilerConfig::optimized(SOLC_VERSION, 200),
        networks,
        paths: ProjectPaths::default(),
        test_runner: TestRunnerConfig { timeout: Duration::from_secs(40) },
        reporting: GasReporterConfig {
            enabled: source.is_set(REPORT_GAS),
            currency: GAS_REPORT_CURRENCY.to_string(),
            output_file: None,
            no_colors: false,
        },
        verification: verification(source),
        typechain: None,
        logger: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = development(&());

        let localhost = config.network(network::LOCALHOST).unwrap();
        assert_eq!(localhost.endpoint(), Some(DEFAULT_LOCAL_URL));
        assert_eq!(localhost.chain_id, Some(LOCAL_NODE_CHAIN_ID));
        assert_eq!(localhost.timeout, Some(Duration::from_secs(30)));
        assert_eq!(localhost.accounts, Accounts::private_key(PLACEHOLDER_PRIVATE_KEY));

        let hardhat = config.network(network::HARDHAT).unwrap();
        assert_eq!(hardhat.chain_id, Some(SIMULATOR_CHAIN_ID));
        assert_eq!(hardhat.mining, Some(MiningConfig { auto: true, interval: Duration::ZERO }));

        assert_eq!(config.compiler.optimizer.runs, 200);
        assert!(!config.reporting.enabled);
        assert!(config.verification.api_key.is_empty());
        assert_eq!(config.test_runner.timeout, Duration::from_secs(40));
    }

    #[test]
    fn test_solc_settings_target_supported_evm() {
        use foundry_compilers::artifacts::EvmVersion;

        let settings = development(&()).compiler.solc_settings();
        let evm_version = settings.evm_version.unwrap();
        assert!(evm_version <= EvmVersion::Shanghai, "solc 0.8.20 cannot target {evm_version}");
    }

    #[test]
    fn test_report_gas_is_a_presence_check() {
        assert!(development(&[("REPORT_GAS", "")]).reporting.enabled);
        assert!(development(&[("REPORT_GAS", "false")]).reporting.enabled);
    }
}
