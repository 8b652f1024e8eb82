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

//! Check command - verify that a network is usable for live calls

use evmenv_config::{EnvironmentConfig, NetworkConfig};
use eyre::Result;

/// One-line summary of a validated network.
pub fn describe_network(name: &str, network: &NetworkConfig) -> String {
    let endpoint = network.endpoint().unwrap_or("in-process");
    let chain = network.chain_id.map_or_else(|| "unset".to_string(), |id| id.to_string());
    format!("{name}: {} at {endpoint} (chain id {chain})", network.kind)
}

/// Validate `name` in `config` and print its summary.
pub fn check_network(config: &EnvironmentConfig, name: &str) -> Result<()> {
    let network = config.validate_network(name)?;
    tracing::info!(network = name, environment = %config.environment, "network is ready");

    println!("{}", describe_network(name, network));
    Ok(())
}
