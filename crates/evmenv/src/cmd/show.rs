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

//! Show command - print the selected configuration

use evmenv_config::EnvironmentConfig;
use eyre::Result;

use crate::Format;

/// Render `config` in `format`. Credentials are always redacted.
pub fn render_config(config: &EnvironmentConfig, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string_pretty(config)?,
    };
    Ok(rendered)
}

/// Print the selected configuration to stdout.
pub fn show_config(config: &EnvironmentConfig, format: Format) -> Result<()> {
    tracing::debug!(environment = %config.environment, ?format, "rendering configuration");
    println!("{}", render_config(config, format)?);
    Ok(())
}
