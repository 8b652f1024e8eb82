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

//! Dotenv file discovery and loading.
//!
//! Files are parsed into a map instead of being written into the process environment,
//! so loading has no global side effects.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use evmenv_common::env::ENV_FILE;
use tracing::trace;

use crate::{ConfigError, EnvSource, Environment};

/// Dotenv file read by production when `ENV_FILE` is unset.
pub const PRODUCTION_ENV_FILE: &str = ".env.prod";

/// Dotenv file read by every other environment when `ENV_FILE` is unset.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Returns the default dotenv file of `environment`.
pub fn default_env_file(environment: Environment) -> PathBuf {
    match environment {
        Environment::Production => PathBuf::from(PRODUCTION_ENV_FILE),
        Environment::Development | Environment::Staging => PathBuf::from(DEFAULT_ENV_FILE),
    }
}

/// Returns `ENV_FILE` from `source` when non-empty, else the default of `environment`.
pub fn env_file_for(environment: Environment, source: &impl EnvSource) -> PathBuf {
    source.non_empty(ENV_FILE).map(PathBuf::from).unwrap_or_else(|| default_env_file(environment))
}

/// Parse the dotenv file at `path`.
///
/// Returns `Ok(None)` if the file does not exist. Later lines override earlier ones.
///
/// `$VAR` and `${VAR}` references are expanded by `dotenvy` from the process environment
/// first, then from earlier lines of the same file. A file without references does not
/// depend on the process environment.
pub fn load(path: &Path) -> Result<Option<BTreeMap<String, String>>, ConfigError> {
    let to_error =
        |source: ::dotenv::Error| ConfigError::DotenvParse { path: path.to_path_buf(), source };

    let iter = match ::dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => return Err(to_error(e)),
    };

    let mut vars = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(to_error)?;
        trace!(path = %path.display(), key = %key, "loaded dotenv variable");
        vars.insert(key, value);
    }

    Ok(Some(vars))
}
