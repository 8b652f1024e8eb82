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

//! Deployment targets.

use evmenv_common::env::NODE_ENV;
use serde::{Deserialize, Serialize};

use crate::EnvSource;

/// The deployment target a configuration is built for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (the default).
    #[default]
    #[display("development")]
    Development,
    /// Staging node deployments.
    #[display("staging")]
    Staging,
    /// Production (mainnet) deployments.
    #[display("production")]
    Production,
}

impl Environment {
    /// All environments, in increasing order of strictness.
    pub const ALL: [Self; 3] = [Self::Development, Self::Staging, Self::Production];

    /// Resolve an environment name.
    ///
    /// `production`/`prod` and `staging`/`stage` are recognized, ignoring case and
    /// surrounding whitespace. Anything else, including an absent name, resolves to
    /// [`Environment::Development`]. This never fails.
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Development;
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        }
    }

    /// Resolve the environment named by `NODE_ENV` in `source`.
    pub fn from_source(source: &impl EnvSource) -> Self {
        Self::resolve(source.var(NODE_ENV).as_deref())
    }

    /// Canonical name of this environment.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Whether this is the production environment.
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases() {
        let cases = [
            (Some("prod"), Environment::Production),
            (Some("production"), Environment::Production),
            (Some("stage"), Environment::Staging),
            (Some("staging"), Environment::Staging),
            (Some("dev"), Environment::Development),
            (Some("development"), Environment::Development),
            (None, Environment::Development),
            (Some(""), Environment::Development),
            (Some("qa-cluster-7"), Environment::Development),
        ];

        for (name, expected) in cases {
            assert_eq!(Environment::resolve(name), expected, "name: {name:?}");
        }
    }

    #[test]
    fn test_resolve_normalizes_case_and_whitespace() {
        assert_eq!(Environment::resolve(Some("  PROD ")), Environment::Production);
        assert_eq!(Environment::resolve(Some("Staging")), Environment::Staging);
    }

    #[test]
    fn test_display_matches_canonical_name() {
        for env in Environment::ALL {
            assert_eq!(env.to_string(), env.as_str());
        }
    }

    #[test]
    fn test_from_source() {
        assert_eq!(Environment::from_source(&[("NODE_ENV", "stage")]), Environment::Staging);
        assert_eq!(Environment::from_source(&[("OTHER", "prod")]), Environment::Development);
    }
}
