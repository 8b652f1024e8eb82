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

//! Deploy command - deploy a compiled contract with the selected configuration

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use alloy_json_abi::JsonAbi;
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use evmenv_config::{Accounts, EnvironmentConfig, GasSetting, NetworkConfig};
use eyre::{bail, eyre, Result, WrapErr};
use tracing::{debug, error, info, warn};

use crate::artifact::Artifact;

/// Request timeout for networks that do not configure one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Build the signer of the first configured account.
///
/// Mnemonic accounts use derivation index 0 of the standard Ethereum path.
pub fn signer_for(accounts: &Accounts) -> Result<PrivateKeySigner> {
    match accounts {
        Accounts::PrivateKeys(keys) => {
            let key = keys.first().ok_or_else(|| eyre!("no private key configured"))?;
            key.expose().trim().parse::<PrivateKeySigner>().wrap_err("invalid private key")
        }
        Accounts::Mnemonic(phrase) => MnemonicBuilder::<English>::default()
            .phrase(phrase.expose().trim())
            .index(0u32)?
            .build()
            .wrap_err("invalid mnemonic"),
        Accounts::Managed => bail!("network accounts are managed by the node; no local signer"),
    }
}

/// Calldata of `balanceOf(account)`, if the ABI declares it.
pub fn balance_of_calldata(abi: &JsonAbi, account: Address) -> Option<Bytes> {
    let function = abi.function("balanceOf")?.first()?;
    let mut data = function.selector().to_vec();
    data.extend_from_slice(account.into_word().as_slice());
    Some(data.into())
}

/// Deploy `contract` to the network called `network_name`.
///
/// The artifact defaults to `<paths.artifacts>/contracts/<contract>.sol/<contract>.json`
/// under `root`. After deployment the deployer's token balance is queried when the ABI
/// has a `balanceOf` function. Every failure is logged before it is returned.
pub async fn deploy_contract(
    config: &EnvironmentConfig,
    root: &Path,
    network_name: &str,
    contract: &str,
    artifact: Option<PathBuf>,
) -> Result<Address> {
    info!(contract, network = network_name, environment = %config.environment, "deploying");

    match run_deployment(config, root, network_name, contract, artifact).await {
        Ok(address) => {
            info!(contract, %address, "contract deployed");
            Ok(address)
        }
        Err(e) => {
            error!(contract, network = network_name, "deployment failed: {e:#}");
            Err(e)
        }
    }
}

async fn run_deployment(
    config: &EnvironmentConfig,
    root: &Path,
    network_name: &str,
    contract: &str,
    artifact: Option<PathBuf>,
) -> Result<Address> {
    let network = config.validate_network(network_name)?;
    if config.environment.is_production() {
        warn!(network = network_name, "deploying with the production configuration");
    }
    let Some(url) = network.endpoint() else {
        bail!("network `{network_name}` runs inside the build tool; deploy to a node instead");
    };

    let artifact_path = artifact.unwrap_or_else(|| root.join(config.paths.artifact_for(contract)));
    let artifact = Artifact::load(&artifact_path)?;

    let signer = signer_for(&network.accounts)?;
    let deployer = signer.address();
    info!(%deployer, "deploying with account");

    let timeout = network.timeout.unwrap_or(DEFAULT_TIMEOUT);
    tokio::time::timeout(timeout, async {
        let provider =
            ProviderBuilder::new().wallet(EthereumWallet::from(signer)).connect(url).await?;

        let tx = deployment_request(&provider, network, network_name, &artifact, deployer).await?;
        let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
        let address = deployed_address(&receipt)?;

        match query_balance(&provider, &artifact.abi, address, deployer).await? {
            Some(balance) => info!(%deployer, %balance, "deployer token balance"),
            None => debug!(contract, "no balanceOf in ABI, skipping balance query"),
        }
        Ok::<_, eyre::Report>(address)
    })
    .await
    .map_err(|_| eyre!("deployment to `{network_name}` timed out after {timeout:?}"))?
}

/// Build the deployment transaction of `artifact` for `network`.
///
/// Checks the node's chain id against the configured one. A fixed gas limit is used
/// as is; otherwise the estimate is scaled by the network's gas multiplier (rounded
/// down). Without a multiplier the gas limit is left to the provider.
async fn deployment_request<P: Provider>(
    provider: &P,
    network: &NetworkConfig,
    network_name: &str,
    artifact: &Artifact,
    deployer: Address,
) -> Result<TransactionRequest> {
    let chain_id = provider.get_chain_id().await?;
    if let Some(expected) = network.chain_id {
        if expected != chain_id {
            bail!("network `{network_name}` expects chain id {expected}, node reports {chain_id}");
        }
    }
    debug!(chain_id, "connected");

    let mut tx = TransactionRequest::default()
        .with_from(deployer)
        .with_deploy_code(artifact.bytecode.clone());

    if let GasSetting::Fixed(price) = network.gas_price {
        tx.set_gas_price(u128::from(price));
    }

    match (network.gas, network.gas_multiplier) {
        (GasSetting::Fixed(limit), _) => tx.set_gas_limit(limit),
        (GasSetting::Auto, Some(multiplier)) => {
            let estimate = provider.estimate_gas(tx.clone()).await?;
            let limit = (estimate as f64 * multiplier).floor() as u64;
            debug!(estimate, limit, "scaled gas estimate");
            tx.set_gas_limit(limit);
        }
        (GasSetting::Auto, None) => {}
    }

    Ok(tx)
}

/// Address of the contract created by a successful deployment.
fn deployed_address(receipt: &TransactionReceipt) -> Result<Address> {
    if !receipt.status() {
        bail!("deployment transaction {} reverted", receipt.transaction_hash);
    }
    receipt
        .contract_address
        .ok_or_else(|| eyre!("receipt of {} has no contract address", receipt.transaction_hash))
}

/// `balanceOf(account)` on `token`, or `None` when the ABI has no such function.
async fn query_balance<P: Provider>(
    provider: &P,
    abi: &JsonAbi,
    token: Address,
    account: Address,
) -> Result<Option<U256>> {
    let Some(input) = balance_of_calldata(abi, account) else {
        return Ok(None);
    };

    let call = TransactionRequest::default().with_to(token).with_input(input);
    let output = provider.call(call).await?;
    if output.len() < 32 {
        bail!("balanceOf returned {} bytes", output.len());
    }
    Ok(Some(U256::from_be_slice(&output[..32])))
}
