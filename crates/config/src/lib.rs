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

//! evmenv Config - Environment configuration selector
//!
//! Picks one of the development, staging and production configuration documents
//! from `NODE_ENV` and builds it from an explicit variable source. The result is an
//! immutable [`EnvironmentConfig`] handed to build, test and deploy tooling.
//!
//! ```rust
//! use evmenv_config::{select, Environment};
//!
//! let config = select(&[("NODE_ENV", "stage"), ("STAGE_CHAIN_ID", "5")]);
//! assert_eq!(config.environment, Environment::Staging);
//! assert_eq!(config.network("stage").unwrap().chain_id, Some(5));
//! ```

use std::{collections::BTreeMap, path::Path};

use tracing::{debug, info, warn};

/// Solidity compiler settings and their solc standard-json form
pub mod compiler;
/// The environment configuration record and network validation
pub mod config;
/// Dotenv file discovery and loading
pub mod dotenv;
/// Millisecond serialization for durations
pub mod duration_ms;
/// Deployment targets and name resolution
pub mod environment;
/// Named network definitions and credentials
pub mod network;
/// Per-environment configuration constructors
pub mod profiles;
/// Redacted credential values
pub mod secret;
/// Variable sources the constructors read overrides from
pub mod source;

mod error;

pub use compiler::*;
pub use config::*;
pub use environment::*;
pub use error::ConfigError;
pub use network::{
    Accounts, ForkingConfig, GasSetting, MiningConfig, NetworkConfig, NetworkKind,
};
pub use secret::Secret;
pub use source::*;

/// Select and build the configuration named by `NODE_ENV` in `source`.
///
/// Dotenv files are resolved relative to the current directory. See [`select_in`].
pub fn select(source: &impl EnvSource) -> EnvironmentConfig {
    select_in(Path::new("."), source)
}

/// Select and build the configuration named by `NODE_ENV` in `source`, reading the
/// dotenv file relative to `root`.
///
/// `NODE_ENV` and `ENV_FILE` are taken from `source` only. Values from the dotenv file
/// fill variables that `source` leaves unset; they never replace provided values.
/// A missing or malformed dotenv file is logged and skipped, so this never fails.
pub fn select_in(root: &Path, source: &impl EnvSource) -> EnvironmentConfig {
    let environment = Environment::from_source(source);
    info!(environment = %environment, "selected environment configuration");

    let env_file = dotenv::env_file_for(environment, source);
    let file_vars = load_env_file(&root.join(&env_file));

    let mut config =
        EnvironmentConfig::for_environment(environment, &Layered::new(source, &file_vars));
    config.env_file = env_file;
    config
}

fn load_env_file(path: &Path) -> BTreeMap<String, String> {
    match dotenv::load(path) {
        Ok(Some(vars)) => {
            debug!(path = %path.display(), count = vars.len(), "loaded dotenv file");
            vars
        }
        Ok(None) => {
            debug!(path = %path.display(), "no dotenv file, using provided variables only");
            BTreeMap::new()
        }
        Err(e) => {
            warn!("{e}; continuing with provided variables only");
            BTreeMap::new()
        }
    }
}
