///////////////////////////////////////////////////////////////////////////////
//
//  Copyright 2018-2026 Robonomics Network <research@robonomics.network>
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//
///////////////////////////////////////////////////////////////////////////////
//! Client configuration.
//!
//! # Examples
//!
//! ```
//! use tfchain_client::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     urls = ["wss://tfchain.grid.tf", "wss://tfchain.grid.tf:443"]
//! "#).unwrap();
//! assert_eq!(config.urls.len(), 2);
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Public mainnet endpoint.
pub const DEFAULT_URL: &str = "wss://tfchain.grid.tf";

/// Configuration for chain connections.
///
/// # Fields
///
/// * `urls` - WebSocket URLs of chain nodes, tried in order
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// WebSocket URLs of chain nodes.
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,
}

fn default_urls() -> Vec<String> {
    vec![DEFAULT_URL.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: default_urls(),
        }
    }
}

impl Config {
    /// Configuration connecting to a single node.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&toml)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(Error::Config("no chain node url configured".into()));
        }
        if let Some(url) = self
            .urls
            .iter()
            .find(|url| !(url.starts_with("ws://") || url.starts_with("wss://")))
        {
            return Err(Error::Config(format!("{} is not a websocket url", url)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Config::default().urls, vec![DEFAULT_URL.to_string()]);
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_urls() {
        let config = Config::from_toml_str(
            r#"urls = ["wss://tfchain.dev.grid.tf", "ws://127.0.0.1:9944"]"#,
        )
        .unwrap();
        assert_eq!(
            config.urls,
            vec!["wss://tfchain.dev.grid.tf", "ws://127.0.0.1:9944"]
        );
    }

    #[test]
    fn test_rejects_invalid_configs() {
        assert!(matches!(
            Config::from_toml_str("urls = []"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str(r#"urls = ["https://tfchain.grid.tf"]"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("urls = 5"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/tfchain.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tfchain.toml"));
    }
}
