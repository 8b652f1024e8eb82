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

//! Environment variable name constants for evmenv configuration.
//!
//! This module provides constant string names for all environment variables read while
//! selecting and building an environment configuration. They are the single source of
//! truth for variable names across the workspace.
//!
//! # Environment Variables
//!
//! ## Selection
//! - [`NODE_ENV`] - Names the deployment target
//! - [`ENV_FILE`] - Overrides the dotenv file consulted for the target
//!
//! ## Network Overrides
//! - [`HARDHAT_NETWORK_URL`] - Local node endpoint
//! - [`STAGE_NETWORK_URL`], [`STAGE_CHAIN_ID`] - Staging node endpoint and chain
//! - [`MAINNET_RPC_URL`], [`GAS_PRICE`] - Production endpoint and gas price
//!
//! ## Credentials
//! - [`TEST_PRIVATE_KEY`], [`TEST_MNEMONIC`] - Development and staging accounts
//! - [`PROD_PRIVATE_KEY`] - Production deployer account
//! - [`ETHERSCAN_API_KEY`] - Block explorer verification key
//!
//! ## Reporting
//! - [`REPORT_GAS`] - Enables gas reporting in development

/// Environment variable naming the deployment target.
///
/// # Values
///
/// - `production` or `prod` - Production configuration
/// - `staging` or `stage` - Staging configuration
/// - Anything else, or unset - Development configuration
///
/// Matching ignores case and surrounding whitespace.
///
/// # Examples
///
/// ```bash
/// NODE_ENV=stage evmenv show
/// ```
pub const NODE_ENV: &str = "NODE_ENV";

/// Environment variable overriding the dotenv file path.
///
/// # Default
///
/// When not set or empty, production reads `.env.prod` and every other environment
/// reads `.env`. A missing file is not an error.
pub const ENV_FILE: &str = "ENV_FILE";

/// Environment variable for the local node RPC endpoint.
///
/// # Default
///
/// `http://127.0.0.1:8545` in every environment.
pub const HARDHAT_NETWORK_URL: &str = "HARDHAT_NETWORK_URL";

/// Environment variable for the development/staging deployer private key.
///
/// # Default
///
/// A well-known placeholder key. It is only ever used for local testing and is never
/// applied to the production configuration.
pub const TEST_PRIVATE_KEY: &str = "TEST_PRIVATE_KEY";

/// Environment variable for the staging mnemonic phrase.
///
/// When set, staging networks derive their accounts from the mnemonic and
/// [`TEST_PRIVATE_KEY`] is ignored.
pub const TEST_MNEMONIC: &str = "TEST_MNEMONIC";

/// Environment variable for the production (mainnet) RPC endpoint.
///
/// Also enables forking of the in-process simulator in production when non-empty.
///
/// # Default
///
/// Empty. A production network without an endpoint fails validation.
pub const MAINNET_RPC_URL: &str = "MAINNET_RPC_URL";

/// Environment variable for the production deployer private key.
///
/// # Default
///
/// None. Production has no fallback key.
pub const PROD_PRIVATE_KEY: &str = "PROD_PRIVATE_KEY";

/// Environment variable for a fixed production gas price in wei.
///
/// # Value Format
///
/// Decimal or `0x`-prefixed hexadecimal integer. Invalid values are ignored with a
/// warning and the gas price stays `auto`.
pub const GAS_PRICE: &str = "GAS_PRICE";

/// Environment variable for the staging node RPC endpoint.
///
/// # Default
///
/// `http://127.0.0.1:8545`.
pub const STAGE_NETWORK_URL: &str = "STAGE_NETWORK_URL";

/// Environment variable for the staging chain id.
///
/// # Default
///
/// `1337`. Invalid values are ignored with a warning.
pub const STAGE_CHAIN_ID: &str = "STAGE_CHAIN_ID";

/// Environment variable for the block explorer API key used for source verification.
///
/// # Default
///
/// Empty string.
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";

/// Environment variable enabling gas reports in development.
///
/// Presence is what matters: `REPORT_GAS=` (empty) still enables reporting. Staging and
/// production always report.
pub const REPORT_GAS: &str = "REPORT_GAS";

/// Environment variable controlling log filtering (standard `tracing` directive syntax).
pub const RUST_LOG: &str = "RUST_LOG";

/// Every variable the configuration selector may read, in documentation order.
pub const ALL: &[&str] = &[
    NODE_ENV,
    ENV_FILE,
    HARDHAT_NETWORK_URL,
    TEST_PRIVATE_KEY,
    TEST_MNEMONIC,
    MAINNET_RPC_URL,
    PROD_PRIVATE_KEY,
    GAS_PRICE,
    STAGE_NETWORK_URL,
    STAGE_CHAIN_ID,
    ETHERSCAN_API_KEY,
    REPORT_GAS,
];
