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

//! Solc settings command - print the compiler input settings

use evmenv_config::EnvironmentConfig;
use eyre::Result;

/// Print the solc standard-json `settings` object of the selected configuration.
pub fn print_solc_settings(config: &EnvironmentConfig) -> Result<()> {
    let compiler = &config.compiler;
    tracing::info!(
        version = %compiler.version,
        runs = compiler.optimizer.runs,
        via_ir = compiler.via_ir,
        "compiler settings"
    );

    println!("{}", serde_json::to_string_pretty(&compiler.solc_settings())?);
    Ok(())
}
