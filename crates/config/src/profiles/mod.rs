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

//! Per-environment configuration constructors.
//!
//! Each constructor is a pure function of its [`EnvSource`]: overrides come from the
//! source, everything else is a fixed default.

mod development;
mod production;
mod staging;

pub use development::development;
pub use production::production;
pub use staging::staging;

use evmenv_common::env::{ETHERSCAN_API_KEY, TEST_MNEMONIC, TEST_PRIVATE_KEY};
use semver::Version;
use tracing::warn;

use crate::{Accounts, EnvSource, Secret, VerificationConfig};

/// Well-known development private key.
///
/// Only development and staging fall back to it. It must never appear in a production
/// configuration.
pub const PLACEHOLDER_PRIVATE_KEY: &str =
    "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113b37c6d8a8c7e3b8b8b8b8b8b";

/// Default local node endpoint.
pub const DEFAULT_LOCAL_URL: &str = "http://127.0.0.1:8545";

/// Chain id of the in-process simulator.
pub const SIMULATOR_CHAIN_ID: u64 = 31337;

/// Chain id of local and staging nodes unless overridden.
pub const LOCAL_NODE_CHAIN_ID: u64 = 1337;

/// Chain id of the production network.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Currency used by gas reports.
pub const GAS_REPORT_CURRENCY: &str = "USD";

/// solc version used by every environment.
pub const SOLC_VERSION: Version = Version::new(0, 8, 20);

/// Value of `key`, or `default` when unset or empty.
pub(crate) fn string_or(source: &impl EnvSource, key: &str, default: &str) -> String {
    source.non_empty(key).unwrap_or_else(|| default.to_string())
}

/// Parse `key` as an unsigned integer (decimal or `0x` hex).
///
/// Unset or empty yields `None`. An unparsable value is logged and also yields `None`,
/// so the caller's default applies.
pub(crate) fn parse_uint(source: &impl EnvSource, key: &str) -> Option<u64> {
    let raw = source.non_empty(key)?;
    let trimmed = raw.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };

    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = key, value = %raw, "ignoring invalid integer override: {e}");
            None
        }
    }
}

/// `TEST_PRIVATE_KEY`, or the placeholder key.
pub(crate) fn test_key_accounts(source: &impl EnvSource) -> Accounts {
    Accounts::private_key(Secret::new(string_or(source, TEST_PRIVATE_KEY, PLACEHOLDER_PRIVATE_KEY)))
}

/// `TEST_MNEMONIC` when set, otherwise [`test_key_accounts`].
pub(crate) fn test_mnemonic_or_key_accounts(source: &impl EnvSource) -> Accounts {
    match source.non_empty(TEST_MNEMONIC) {
        Some(phrase) => Accounts::Mnemonic(Secret::new(phrase)),
        None => test_key_accounts(source),
    }
}

/// Explorer key from `ETHERSCAN_API_KEY`, empty when unset.
pub(crate) fn verification(source: &impl EnvSource) -> VerificationConfig {
    VerificationConfig { api_key: string_or(source, ETHERSCAN_API_KEY, "") }
}
