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
//! Subxt JSON-RPC backend.

use async_trait::async_trait;
use log::{debug, trace};
use subxt::backend::{legacy::LegacyRpcMethods, rpc::RpcClient};
use subxt::{OnlineClient, PolkadotConfig};
use tfchain_primitives::{Hash, Phase};

use super::{Backend, RawEvent};
use crate::error::{BoxError, Error, Result};

type ChainHash = <PolkadotConfig as subxt::Config>::Hash;

/// Backend talking to a chain node over a WebSocket JSON-RPC connection.
///
/// One RPC connection is shared by the legacy `state_getStorage` calls and by
/// the metadata aware client used to split block events.
pub struct RpcBackend {
    url: String,
    api: OnlineClient<PolkadotConfig>,
    rpc: LegacyRpcMethods<PolkadotConfig>,
}

impl RpcBackend {
    /// Connect to a node, e.g. `wss://tfchain.grid.tf`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connect`] if the node can't be reached or its
    /// metadata can't be fetched.
    pub async fn connect(url: &str) -> Result<Self> {
        debug!("Connecting to chain node at {}", url);
        let connect_err = |source: subxt::Error| Error::Connect {
            url: url.to_string(),
            source: source.into(),
        };

        let client = RpcClient::from_url(url).await.map_err(connect_err)?;
        let api = OnlineClient::<PolkadotConfig>::from_rpc_client(client.clone())
            .await
            .map_err(connect_err)?;
        let rpc = LegacyRpcMethods::new(client);

        debug!(
            "Connected to {}, runtime spec version {}",
            url,
            api.runtime_version().spec_version
        );

        Ok(Self {
            url: url.to_string(),
            api,
            rpc,
        })
    }

    /// Endpoint this backend is connected to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn phase(phase: subxt::events::Phase) -> Phase {
    match phase {
        subxt::events::Phase::ApplyExtrinsic(index) => Phase::ApplyExtrinsic(index),
        subxt::events::Phase::Finalization => Phase::Finalization,
        subxt::events::Phase::Initialization => Phase::Initialization,
    }
}

#[async_trait]
impl Backend for RpcBackend {
    async fn storage(&self, key: &[u8], at: Option<Hash>) -> Result<Option<Vec<u8>>, BoxError> {
        trace!("state_getStorage 0x{} at {:?}", hex::encode(key), at);
        let at = at.map(|hash| ChainHash::from(hash.0));
        Ok(self.rpc.state_get_storage(key, at).await?)
    }

    async fn events(&self, block: Hash) -> Result<Vec<RawEvent>, BoxError> {
        trace!("Fetching events of block {:?}", block);
        let events = self.api.events().at(ChainHash::from(block.0)).await?;

        let mut raw = Vec::with_capacity(events.len() as usize);
        for event in events.iter() {
            let event = event?;
            raw.push(RawEvent {
                phase: phase(event.phase()),
                pallet: event.pallet_name().to_string(),
                name: event.variant_name().to_string(),
                fields: event.field_bytes().to_vec(),
                topics: event.topics().iter().map(|t| Hash::from(t.0)).collect(),
            });
        }

        Ok(raw)
    }
}
