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

//! Solidity compiler settings.

use foundry_compilers::artifacts::{EvmVersion, Optimizer, Settings};
use semver::Version;
use serde::Serialize;

/// Optimizer flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimizerConfig {
    /// Whether the optimizer runs.
    pub enabled: bool,
    /// Expected number of contract executions the optimizer tunes for.
    pub runs: usize,
}

/// Compiler version and codegen settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// solc version.
    pub version: Version,
    /// Optimizer flags.
    pub optimizer: OptimizerConfig,
    /// Compile through the Yul IR pipeline.
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
    /// Target EVM version; `None` uses the newest version `version` supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_version: Option<EvmVersion>,
}

impl CompilerConfig {
    /// Optimized build for `version` with `runs` optimizer runs.
    pub fn optimized(version: Version, runs: usize) -> Self {
        Self {
            version,
            optimizer: OptimizerConfig { enabled: true, runs },
            via_ir: false,
            evm_version: None,
        }
    }

    /// Convert into solc standard-json settings.
    pub fn solc_settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            optimizer: Optimizer {
                enabled: Some(self.optimizer.enabled),
                runs: Some(self.optimizer.runs),
                ..Default::default()
            },
            via_ir: if self.via_ir { Some(true) } else { defaults.via_ir },
            evm_version: self
                .evm_version
                .or_else(|| EvmVersion::default().normalize_version_solc(&self.version)),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solc_settings_carry_optimizer() {
        let compiler = CompilerConfig::optimized(Version::new(0, 8, 20), 200);
        let settings = compiler.solc_settings();

        assert_eq!(settings.optimizer.enabled, Some(true));
        assert_eq!(settings.optimizer.runs, Some(200));
        assert_ne!(settings.via_ir, Some(true));
    }

    #[test]
    fn test_solc_settings_carry_codegen_flags() {
        let compiler = CompilerConfig {
            via_ir: true,
            evm_version: Some(EvmVersion::Paris),
            ..CompilerConfig::optimized(Version::new(0, 8, 20), 2000)
        };
        let settings = compiler.solc_settings();

        assert_eq!(settings.optimizer.runs, Some(2000));
        assert_eq!(settings.via_ir, Some(true));
        assert_eq!(settings.evm_version, Some(EvmVersion::Paris));
    }

    #[test]
    fn test_default_evm_version_matches_solc() {
        let settings = CompilerConfig::optimized(Version::new(0, 8, 20), 200).solc_settings();
        assert_eq!(settings.evm_version, Some(EvmVersion::Shanghai));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["evmVersion"], "shanghai");
    }
}
