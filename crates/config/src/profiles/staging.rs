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

use evmenv_common::env::{HARDHAT_NETWORK_URL, STAGE_CHAIN_ID, STAGE_NETWORK_URL};

use super::*;
use crate::{
    dotenv, network, CompilerConfig, Environment, EnvironmentConfig, GasReporterConfig,
    NetworkConfig, NetworkKind, ProjectPaths, TestRunnerConfig,
};

const NODE_TIMEOUT: Duration = Duration::from_secs(60);
const GAS_MULTIPLIER: f64 = 1.2;

/// Staging configuration: local and staging nodes sharing the test accounts.
pub fn staging(source: &impl EnvSource) -> EnvironmentConfig {
    let environment = Environment::Staging;

    let localhost = NetworkConfig::remote(
        NetworkKind::LocalNode,
        string_or(source, HARDHAT_NETWORK_URL, DEFAULT_LOCAL_URL),
    )
    .with_chain_id(Some(LOCAL_NODE_CHAIN_ID))
    .with_accounts(test_mnemonic_or_key_accounts(source))
    .with_timeout(NODE_TIMEOUT)
    .with_gas_multiplier(GAS_MULTIPLIER);

    let stage = NetworkConfig::remote(
        NetworkKind::StagingNode,
        string_or(source, STAGE_NETWORK_URL, DEFAULT_LOCAL_URL),
    )
    .with_chain_id(Some(parse_uint(source, STAGE_CHAIN_ID).unwrap_or(LOCAL_NODE_CHAIN_ID)))
    .with_accounts(test_mnemonic_or_key_accounts(source))
    .with_timeout(NODE_TIMEOUT)
    .with_gas_multiplier(GAS_MULTIPLIER);

    let networks = BTreeMap::from([
        (network::HARDHAT.to_string(), NetworkConfig::simulator(SIMULATOR_CHAIN_ID)),
        (network::LOCALHOST.to_string(), localhost),
        (network::STAGE.to_string(), stage),
    ]);

    EnvironmentConfig {
        environment,
        env_file: dotenv::env_file_for(environment, source),
        compiler: CompilerConfig::optimized(SOLC_VERSION, 1000),
        networks,
        paths: ProjectPaths::default(),
        test_runner: TestRunnerConfig { timeout: Duration::from_secs(60) },
        reporting: GasReporterConfig {
            enabled: true,
            currency: GAS_REPORT_CURRENCY.to_string(),
            output_file: Some(PathBuf::from("gas-report.txt")),
            no_colors: true,
        },
        verification: verification(source),
        typechain: None,
        logger: None,
    }
}
