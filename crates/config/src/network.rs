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

//! Named network definitions.

use std::time::Duration;

use derive_more::Display;
use evmenv_common::env::{
    HARDHAT_NETWORK_URL, MAINNET_RPC_URL, PROD_PRIVATE_KEY, STAGE_NETWORK_URL, TEST_PRIVATE_KEY,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{duration_ms, Secret};

/// Network name of the in-process simulator.
pub const HARDHAT: &str = "hardhat";
/// Network name of the local node.
pub const LOCALHOST: &str = "localhost";
/// Network name of the staging node.
pub const STAGE: &str = "stage";
/// Network name of the production node.
pub const MAINNET: &str = "mainnet";

/// Role a named network plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkKind {
    /// The build tool's in-process EVM.
    #[display("local-simulator")]
    LocalSimulator,
    /// A node running on the developer's machine.
    #[display("local-node")]
    LocalNode,
    /// A shared staging node.
    #[display("staging-node")]
    StagingNode,
    /// A production chain endpoint.
    #[display("production-node")]
    ProductionNode,
}

impl NetworkKind {
    /// Whether the network runs inside the build tool and needs no endpoint or accounts.
    pub const fn is_in_process(&self) -> bool {
        matches!(self, Self::LocalSimulator)
    }

    /// Variable that overrides this network's endpoint.
    pub const fn endpoint_var(&self) -> Option<&'static str> {
        match self {
            Self::LocalSimulator => None,
            Self::LocalNode => Some(HARDHAT_NETWORK_URL),
            Self::StagingNode => Some(STAGE_NETWORK_URL),
            Self::ProductionNode => Some(MAINNET_RPC_URL),
        }
    }

    /// Variable that provides this network's signing key.
    pub const fn accounts_var(&self) -> Option<&'static str> {
        match self {
            Self::LocalSimulator => None,
            Self::LocalNode | Self::StagingNode => Some(TEST_PRIVATE_KEY),
            Self::ProductionNode => Some(PROD_PRIVATE_KEY),
        }
    }
}

/// Signing credentials of a network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Accounts {
    /// Nothing configured; the build tool (or the node) supplies accounts.
    #[default]
    Managed,
    /// Explicit private keys. May be empty.
    PrivateKeys(Vec<Secret>),
    /// Accounts derived from a mnemonic phrase.
    Mnemonic(Secret),
}

impl Accounts {
    /// A single private key.
    pub fn private_key(key: impl Into<Secret>) -> Self {
        Self::PrivateKeys(vec![key.into()])
    }

    /// Whether at least one signer can be derived.
    pub fn has_signer(&self) -> bool {
        match self {
            Self::Managed => false,
            Self::PrivateKeys(keys) => !keys.is_empty(),
            Self::Mnemonic(_) => true,
        }
    }

    /// Returns all configured private keys (empty for managed or mnemonic accounts).
    pub fn private_keys(&self) -> &[Secret] {
        match self {
            Self::PrivateKeys(keys) => keys,
            _ => &[],
        }
    }
}

impl Serialize for Accounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Managed => serializer.serialize_str("remote"),
            Self::PrivateKeys(keys) => keys.serialize(serializer),
            Self::Mnemonic(phrase) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("mnemonic", phrase)?;
                map.end()
            }
        }
    }
}

/// Gas or gas price setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GasSetting {
    /// Estimated by the client at send time.
    #[default]
    Auto,
    /// A fixed value (gas units, or wei per gas for prices).
    Fixed(u64),
}

impl Serialize for GasSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(value) => serializer.serialize_u64(*value),
        }
    }
}

/// Block production settings of the in-process simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiningConfig {
    /// Mine a block for every transaction.
    pub auto: bool,
    /// Interval between blocks when interval mining (zero disables it).
    #[serde(with = "duration_ms")]
    pub interval: Duration,
}

/// Forking settings of the in-process simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForkingConfig {
    /// Upstream RPC endpoint to fork from.
    pub url: String,
    /// Whether forking is active.
    pub enabled: bool,
}

/// Connection parameters of one named network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Role of the network.
    pub kind: NetworkKind,
    /// RPC endpoint; `None` for the in-process simulator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Expected chain id, if pinned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Signing credentials.
    pub accounts: Accounts,
    /// Gas limit per transaction.
    pub gas: GasSetting,
    /// Gas price per transaction.
    pub gas_price: GasSetting,
    /// Multiplier applied to gas estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_multiplier: Option<f64>,
    /// RPC request timeout.
    #[serde(with = "duration_ms::option", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
    /// Block production settings (simulator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mining: Option<MiningConfig>,
    /// Forking settings (simulator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingConfig>,
    /// Explorer API key used when verifying contracts deployed to this network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_api_key: Option<String>,
}

impl NetworkConfig {
    /// The in-process simulator on `chain_id`.
    pub fn simulator(chain_id: u64) -> Self {
        Self {
            kind: NetworkKind::LocalSimulator,
            url: None,
            chain_id: Some(chain_id),
            accounts: Accounts::Managed,
            gas: GasSetting::Auto,
            gas_price: GasSetting::Auto,
            gas_multiplier: None,
            timeout: None,
            mining: None,
            forking: None,
            verify_api_key: None,
        }
    }

    /// A remote network of `kind` reachable at `url`.
    pub fn remote(kind: NetworkKind, url: impl Into<String>) -> Self {
        Self { kind, url: Some(url.into()), ..Self::simulator(0) }.with_chain_id(None)
    }

    /// Set the pinned chain id.
    pub fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set the accounts.
    pub fn with_accounts(mut self, accounts: Accounts) -> Self {
        self.accounts = accounts;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the gas multiplier.
    pub fn with_gas_multiplier(mut self, multiplier: f64) -> Self {
        self.gas_multiplier = Some(multiplier);
        self
    }

    /// Returns the endpoint if it is set and non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}
