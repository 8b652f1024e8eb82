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

//! Logging configuration for evmenv components
//!
//! Provides centralized logging setup with:
//! - Colorful console output on stderr (stdout is reserved for command output)
//! - Environment variable support (RUST_LOG)
//! - A default level derived from the `-v` count when RUST_LOG is unset

use eyre::Result;
use std::{env, io, sync::Once};
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::env::RUST_LOG;

/// Map a `-v` repeat count to the default log level.
///
/// * `0` - `warn`
/// * `1` - `info`
/// * `2` - `debug`
/// * `3+` - `trace`
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build an environment filter, falling back to `default_level` when RUST_LOG is unset
/// or invalid.
fn env_filter(default_level: Level) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level.as_str()))
        .map_err(|e| eyre::eyre!("Failed to create environment filter: {}", e))
}

/// Initialize console logging for evmenv components
///
/// This function sets up:
/// - Colorful, structured console logging with timestamps, written to stderr
/// - Environment variable support for log levels (RUST_LOG)
/// - A default level taken from `verbosity` if no RUST_LOG is set
///
/// # Arguments
/// * `component_name` - Name of the component (e.g., "evmenv")
/// * `verbosity` - Number of `-v` flags given on the command line
///
/// # Returns
/// * `Result<()>` - Success or error from logging initialization
///
/// # Examples
/// ```rust
/// use evmenv_common::logging;
///
/// fn main() -> eyre::Result<()> {
///     logging::init_logging("evmenv", 1)?;
///
///     tracing::info!("Application started");
///     Ok(())
/// }
/// ```
pub fn init_logging(component_name: &str, verbosity: u8) -> Result<()> {
    let env_filter = env_filter(level_for_verbosity(verbosity))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(verbosity >= 2)
        .with_line_number(verbosity >= 2)
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(true)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::debug!(component = component_name, "Logging initialized with console output");

    log_environment_info(component_name);

    Ok(())
}

/// Log useful environment and process information
fn log_environment_info(component_name: &str) {
    let rust_log = env::var(RUST_LOG).unwrap_or_else(|_| "unset".to_string());
    let args: Vec<String> = env::args().collect();

    tracing::debug!(
        component = component_name,
        rust_log = %rust_log,
        args = ?args,
        "Environment information"
    );

    let configured: Vec<&str> =
        crate::env::ALL.iter().copied().filter(|name| env::var_os(name).is_some()).collect();
    tracing::debug!(variables = ?configured, "Configuration variables set in the environment");

    if let Ok(current_dir) = env::current_dir() {
        tracing::trace!(
            working_directory = %current_dir.display(),
            "Working directory"
        );
    }
}

/// Initialize simple logging (console only, no fancy formatting)
///
/// This is useful for tests or simple utilities that don't need
/// the full logging setup.
///
/// # Arguments
/// * `level` - The default log level to use
pub fn init_simple_logging(level: Level) -> Result<()> {
    let env_filter = env_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize simple logging: {}", e))?;

    Ok(())
}

// Global test logging initialization - ensures logging is only set up once across all tests
static TEST_LOGGING_INIT: Once = Once::new();

/// Safe logging initialization for tests - can be called multiple times without crashing
///
/// Uses `std::sync::Once` to ensure initialization happens only once per test process.
/// Defaults to INFO but respects RUST_LOG if set.
///
/// # Usage
/// ```rust
/// use evmenv_common::logging;
/// use tracing::info;
///
/// #[test]
/// fn my_test() {
///     logging::ensure_test_logging(None);
///     info!("This will work safely in any test!");
/// }
/// ```
pub fn ensure_test_logging(default_level: Option<Level>) {
    TEST_LOGGING_INIT.call_once(|| {
        let default_level = default_level.unwrap_or(Level::INFO);
        // A subscriber may already be installed by another harness; that is fine.
        let _ = init_simple_logging(default_level);
    });
}
