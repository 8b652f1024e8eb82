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

//! Compiled contract artifacts as written by the build tool.

use std::path::Path;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use eyre::{bail, Result, WrapErr};
use serde::Deserialize;

/// The parts of a Hardhat artifact (`hh-sol-artifact-1`) needed to deploy a contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract name
    pub contract_name: String,
    /// Source file the contract was compiled from
    #[serde(default)]
    pub source_name: Option<String>,
    /// Contract ABI
    pub abi: JsonAbi,
    /// Creation bytecode
    pub bytecode: Bytes,
}

impl Artifact {
    /// Read and parse the artifact at `path`.
    ///
    /// Fails when the artifact carries no creation code (interfaces, abstract contracts).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read artifact {}", path.display()))?;
        let artifact: Self = serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse artifact {}", path.display()))?;

        if artifact.bytecode.is_empty() {
            bail!("artifact {} has no creation bytecode", path.display());
        }

        tracing::debug!(
            contract = %artifact.contract_name,
            size = artifact.bytecode.len(),
            "loaded artifact"
        );
        Ok(artifact)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal artifact of an ERC-20 style token.
    pub(crate) const TOKEN_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "Token",
        "sourceName": "contracts/Token.sol",
        "abi": [
            {
                "type": "function",
                "name": "balanceOf",
                "stateMutability": "view",
                "inputs": [{ "name": "account", "type": "address", "internalType": "address" }],
                "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
            }
        ],
        "bytecode": "0x6080604052348015600f57600080fd5b50",
        "deployedBytecode": "0x6080604052",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    #[test]
    fn test_load_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Token.json");
        std::fs::write(&path, TOKEN_ARTIFACT).unwrap();

        let artifact = Artifact::load(&path).unwrap();
        assert_eq!(artifact.contract_name, "Token");
        assert_eq!(artifact.source_name.as_deref(), Some("contracts/Token.sol"));
        assert!(artifact.abi.function("balanceOf").is_some());
        assert_eq!(artifact.bytecode.len(), 17);
    }

    #[test]
    fn test_load_rejects_missing_or_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Artifact::load(&dir.path().join("Missing.json")).is_err());

        let path = dir.path().join("IToken.json");
        std::fs::write(&path, r#"{"contractName":"IToken","abi":[],"bytecode":"0x"}"#).unwrap();
        let err = Artifact::load(&path).unwrap_err();
        assert!(err.to_string().contains("no creation bytecode"));
    }
}
