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
//! Connection manager over a list of chain nodes.

use log::{debug, warn};

use crate::backend::RpcBackend;
use crate::client::Client;
use crate::config::Config;
use crate::error::{Error, Result};

/// Hands out clients connected to the first reachable configured node.
#[derive(Clone, Debug)]
pub struct Manager {
    config: Config,
}

impl Manager {
    /// Create a manager for the configured nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configured node URLs.
    pub fn urls(&self) -> &[String] {
        &self.config.urls
    }

    /// Connect to the first node accepting the connection.
    ///
    /// Nodes are tried in configuration order. If none is reachable the error
    /// of the last attempt is returned.
    pub async fn connect(&self) -> Result<Client<RpcBackend>> {
        let mut last_err = None;
        for url in &self.config.urls {
            match RpcBackend::connect(url).await {
                Ok(backend) => {
                    debug!("Using chain node {}", url);
                    return Ok(Client::new(backend));
                }
                Err(e) => {
                    warn!("Chain node {} unavailable: {}", url, e);
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| Error::Config("no chain node url configured".into())))
    }
}
