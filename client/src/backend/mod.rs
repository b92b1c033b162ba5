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
//! Transport used by the client to reach a chain node.
//!
//! The [`Backend`] trait is the only seam between the client and the network:
//! a raw storage read and the event list of a block. [`RpcBackend`] implements
//! it over a subxt JSON-RPC connection.

pub mod rpc;

pub use rpc::RpcBackend;

use async_trait::async_trait;
use std::sync::Arc;
use tfchain_primitives::{Hash, Phase};

use crate::error::BoxError;

/// One event record of a block, split out of the block's event list.
///
/// Pallet and event names are resolved from the runtime metadata by the
/// backend; `fields` holds the SCALE encoded payload of the event only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEvent {
    /// Block phase the event was emitted in.
    pub phase: Phase,
    /// Emitting pallet.
    pub pallet: String,
    /// Event name.
    pub name: String,
    /// Encoded event payload.
    pub fields: Vec<u8>,
    /// Event topics.
    pub topics: Vec<Hash>,
}

/// Read access to chain state.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Raw value under a storage key, at block `at` or at the latest block.
    async fn storage(&self, key: &[u8], at: Option<Hash>) -> Result<Option<Vec<u8>>, BoxError>;

    /// Events emitted in a block.
    async fn events(&self, block: Hash) -> Result<Vec<RawEvent>, BoxError>;
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for Arc<B> {
    async fn storage(&self, key: &[u8], at: Option<Hash>) -> Result<Option<Vec<u8>>, BoxError> {
        (**self).storage(key, at).await
    }

    async fn events(&self, block: Hash) -> Result<Vec<RawEvent>, BoxError> {
        (**self).events(block).await
    }
}
