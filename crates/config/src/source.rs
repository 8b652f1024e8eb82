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

//! Variable sources.
//!
//! Configuration constructors never read the process environment directly. They take
//! an [`EnvSource`], so tests can pass a plain map and the binary can pass
//! [`ProcessEnv`] layered over a dotenv file.

use std::collections::{BTreeMap, HashMap};

use auto_impl::auto_impl;

/// Trait for looking up configuration variables by name.
#[auto_impl(&, Box)]
pub trait EnvSource {
    /// Returns the raw value of `key`, if it is set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` if it is set and not empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// Check whether `key` is set at all, including to an empty value.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// No variables at all.
impl EnvSource for () {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.as_slice().var(key)
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

/// Two sources stacked: `primary` is consulted first, then `fallback`.
///
/// Used to place dotenv file values beneath the process environment.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    /// New layered source.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}
