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

//! evmenv - Environment Configuration for EVM Projects
//!
//! Selects the development, staging or production configuration of a Hardhat-style
//! project, prints it, and deploys compiled contracts with it.

use std::{collections::HashMap, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use evmenv_common::{env::NODE_ENV, init_logging};
use evmenv_config::{select_in, Environment, EnvironmentConfig, Layered, ProcessEnv};
use eyre::Result;

mod artifact;
mod cmd;

use cmd::{check_network, deploy_contract, print_solc_settings, show_config};

/// Command-line interface for evmenv
#[derive(Debug, Parser)]
#[command(name = "evmenv")]
#[command(about = "Environment configuration selector for EVM projects")]
#[command(version)]
pub struct Cli {
    /// Deployment target (overrides NODE_ENV)
    #[arg(long = "env", value_enum, global = true)]
    pub environment: Option<EnvArg>,

    /// Project root; dotenv files and artifacts are resolved against it
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Verbosity level (repeat for more: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Deployment target names accepted by `--env`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvArg {
    /// Local development
    #[value(alias = "dev")]
    Development,
    /// Staging node
    #[value(alias = "stage")]
    Staging,
    /// Production (mainnet)
    #[value(alias = "prod")]
    Production,
}

impl From<EnvArg> for Environment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Development => Self::Development,
            EnvArg::Staging => Self::Staging,
            EnvArg::Production => Self::Production,
        }
    }
}

/// Output formats of `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// TOML
    Toml,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the selected configuration (credentials are redacted)
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print solc standard-json settings for the selected configuration
    SolcSettings,
    /// Check that a network is usable for live calls
    Check {
        /// Network name (e.g. localhost, stage, mainnet)
        network: String,
    },
    /// Deploy a compiled contract artifact
    Deploy {
        /// Network name (e.g. localhost, stage, mainnet)
        network: String,

        /// Contract name, used to locate the artifact
        #[arg(long, default_value = "Token")]
        contract: String,

        /// Explicit artifact path (default: <artifacts>/contracts/<Name>.sol/<Name>.json)
        #[arg(long)]
        artifact: Option<PathBuf>,
    },
}

impl Cli {
    /// Build the configuration this invocation runs with.
    pub fn load_config(&self) -> EnvironmentConfig {
        let overrides: HashMap<String, String> = self
            .environment
            .map(|env| (NODE_ENV.to_string(), Environment::from(env).as_str().to_string()))
            .into_iter()
            .collect();

        select_in(&self.root, &Layered::new(overrides, ProcessEnv))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging("evmenv", cli.verbose)?;

    let config = cli.load_config();

    match &cli.command {
        Commands::Show { format } => show_config(&config, *format)?,
        Commands::SolcSettings => print_solc_settings(&config)?,
        Commands::Check { network } => check_network(&config, network)?,
        Commands::Deploy { network, contract, artifact } => {
            let artifact = artifact.clone().map(|path| cli.root.join(path));
            deploy_contract(&config, &cli.root, network, contract, artifact).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_env_aliases() {
        let cli = Cli::try_parse_from(["evmenv", "--env", "prod", "show"]).unwrap();
        assert_eq!(cli.environment, Some(EnvArg::Production));

        let cli = Cli::try_parse_from(["evmenv", "--env", "stage", "check", "stage"]).unwrap();
        assert_eq!(cli.environment, Some(EnvArg::Staging));
        assert!(matches!(cli.command, Commands::Check { ref network } if network == "stage"));
    }

    #[test]
    fn test_cli_deploy_defaults() {
        let cli = Cli::try_parse_from(["evmenv", "-vv", "deploy", "localhost"]).unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Deploy { network, contract, artifact } => {
                assert_eq!(network, "localhost");
                assert_eq!(contract, "Token");
                assert!(artifact.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let args = ["evmenv", "show", "--env", "prod", "--root", "app"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.environment, Some(EnvArg::Production));
        assert_eq!(cli.root, PathBuf::from("app"));

        let args = ["evmenv", "check", "mainnet", "--env", "production"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.environment, Some(EnvArg::Production));
    }

    #[test]
    fn test_cli_rejects_unknown_env() {
        assert!(Cli::try_parse_from(["evmenv", "--env", "qa", "show"]).is_err());
    }
}
