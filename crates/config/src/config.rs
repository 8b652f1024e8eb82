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

//! The environment configuration record.

use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use serde::Serialize;

use crate::{
    duration_ms, profiles, CompilerConfig, ConfigError, EnvSource, Environment, NetworkConfig,
};

/// Project directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    /// Contract sources.
    pub sources: PathBuf,
    /// Test suites.
    pub tests: PathBuf,
    /// Compiler cache.
    pub cache: PathBuf,
    /// Build artifacts.
    pub artifacts: PathBuf,
}

impl ProjectPaths {
    /// Standard layout with the given cache and artifact directories.
    pub fn new(cache: impl Into<PathBuf>, artifacts: impl Into<PathBuf>) -> Self {
        Self {
            sources: PathBuf::from("./contracts"),
            tests: PathBuf::from("./test"),
            cache: cache.into(),
            artifacts: artifacts.into(),
        }
    }

    /// Path of the build artifact of `contract`, compiled from `contracts/<contract>.sol`.
    pub fn artifact_for(&self, contract: &str) -> PathBuf {
        self.artifacts
            .join("contracts")
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json"))
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new("./cache", "./artifacts")
    }
}

/// Test runner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestRunnerConfig {
    /// Per-test timeout.
    #[serde(with = "duration_ms")]
    pub timeout: Duration,
}

/// Gas usage reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasReporterConfig {
    /// Whether gas usage is reported.
    pub enabled: bool,
    /// Fiat currency for cost estimates.
    pub currency: String,
    /// Report destination; stdout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    /// Disable ANSI colors in the report.
    pub no_colors: bool,
}

/// Block explorer verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationConfig {
    /// Explorer API key; empty when not configured.
    pub api_key: String,
}

/// Contract binding generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypechainConfig {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Binding target.
    pub target: String,
}

/// Build tool logger settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    /// Prefix log lines with timestamps.
    pub timestamp: bool,
}

/// The full set of settings for one deployment target.
///
/// Built once at startup, then read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Target this configuration was built for.
    pub environment: Environment,
    /// Dotenv file consulted for this target.
    pub env_file: PathBuf,
    /// Compiler settings.
    pub compiler: CompilerConfig,
    /// Named networks.
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Project layout.
    pub paths: ProjectPaths,
    /// Test runner settings.
    pub test_runner: TestRunnerConfig,
    /// Gas reporting.
    pub reporting: GasReporterConfig,
    /// Contract verification.
    pub verification: VerificationConfig,
    /// Binding generation, when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typechain: Option<TypechainConfig>,
    /// Logger settings, when customized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<LoggerConfig>,
}

impl EnvironmentConfig {
    /// Build the configuration of `environment` from `source`.
    ///
    /// Dispatches to the matching constructor in [`profiles`]. No dotenv file is read;
    /// see [`crate::select`] for that.
    pub fn for_environment(environment: Environment, source: &impl EnvSource) -> Self {
        match environment {
            Environment::Development => profiles::development(source),
            Environment::Staging => profiles::staging(source),
            Environment::Production => profiles::production(source),
        }
    }

    /// Returns the network called `name`.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks.get(name).ok_or_else(|| ConfigError::UnknownNetwork {
            name: name.to_string(),
            environment: self.environment,
        })
    }

    /// Returns the network called `name`, checked for a live call.
    ///
    /// Remote networks need a non-empty endpoint and at least one signer. The
    /// in-process simulator always passes.
    pub fn validate_network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        let network = self.network(name)?;
        if network.kind.is_in_process() {
            return Ok(network);
        }

        if network.endpoint().is_none() {
            return Err(ConfigError::MissingEndpoint {
                name: name.to_string(),
                hint: network.kind.endpoint_var().unwrap_or("an endpoint"),
            });
        }

        if !network.accounts.has_signer() {
            return Err(ConfigError::MissingAccounts {
                name: name.to_string(),
                hint: network.kind.accounts_var().unwrap_or("an account"),
            });
        }

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path_layout() {
        let paths = ProjectPaths::new("./cache-prod", "./artifacts-prod");

        assert_eq!(
            paths.artifact_for("Token"),
            PathBuf::from("./artifacts-prod/contracts/Token.sol/Token.json")
        );
        assert_eq!(paths.sources, PathBuf::from("./contracts"));
    }

    #[test]
    fn test_unknown_network() {
        let config = EnvironmentConfig::for_environment(Environment::Development, &());

        let err = config.network("mainnet").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork { .. }));
        assert!(err.to_string().contains("development"));
    }
}
