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

//! evmenv Common - Shared functionality for evmenv components
//!
//! This crate provides the pieces shared by the configuration library and the
//! `evmenv` binary: environment variable names and logging setup.

/// Environment variable name constants consumed by the configuration selector
pub mod env;
/// Logging setup and utilities for consistent logging across evmenv components
pub mod logging;

pub use logging::*;
