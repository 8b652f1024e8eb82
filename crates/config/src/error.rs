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

use std::path::PathBuf;

use thiserror::Error;

use crate::Environment;

/// Errors raised while loading or validating an environment configuration.
///
/// Selection itself never fails; these only surface from explicit dotenv loading and
/// from network validation before a live call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dotenv file exists but could not be read or parsed
    #[error("failed to load dotenv file {path}: {source}")]
    DotenvParse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying parser error
        #[source]
        source: ::dotenv::Error,
    },

    /// No network with this name in the selected configuration
    #[error("network `{name}` is not configured for the {environment} environment")]
    UnknownNetwork {
        /// Requested network name
        name: String,
        /// Active environment
        environment: Environment,
    },

    /// The network has no RPC endpoint
    #[error("network `{name}` has no RPC endpoint (set {hint})")]
    MissingEndpoint {
        /// Network name
        name: String,
        /// Variable that provides the endpoint
        hint: &'static str,
    },

    /// The network has no signing credentials
    #[error("network `{name}` has no accounts configured (set {hint})")]
    MissingAccounts {
        /// Network name
        name: String,
        /// Variable that provides the credentials
        hint: &'static str,
    },
}
