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
//! Storage client.
//!
//! [`Client`] wraps a [`Backend`] and turns typed lookups into a single storage
//! read followed by a decode:
//!
//! ```text
//! key ── SCALE encode ── derive storage key ── point read ── version probe ── decode
//! ```
//!
//! Nothing is cached or retried. Lookup methods live next to the records they
//! return, see the `tfgrid`, `contract` and `bridge` modules.
//!
//! # Examples
//!
//! ```no_run
//! use tfchain_client::{Client, RpcBackend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = RpcBackend::connect("wss://tfchain.grid.tf").await?;
//!     let client = Client::new(backend);
//!
//!     let farm = client.farm(1).await?;
//!     let twin = client.twin(farm.twin_id).await?;
//!     println!("farm {} is owned by {}", farm.name, twin.account);
//!     Ok(())
//! }
//! ```

use log::{debug, trace};
use parity_scale_codec::{Decode, Encode};
use std::sync::Arc;
use tfchain_primitives::Hash;

use crate::backend::{Backend, RpcBackend};
use crate::error::{Error, Result};
use crate::events::{EventCatalog, EventRecords};
use crate::storage::StorageEntry;
use crate::versioned::{decode_exact, decode_versioned, VersionedRecord};

/// Read-only client for the grid chain storage.
///
/// Cloning is cheap: clones share the backend connection and the event
/// catalog.
pub struct Client<B = RpcBackend> {
    backend: Arc<B>,
    catalog: Arc<EventCatalog>,
    at: Option<Hash>,
}

impl<B> Clone for Client<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            catalog: self.catalog.clone(),
            at: self.at,
        }
    }
}

impl<B: Backend> Client<B> {
    /// Create a client reading the latest chain state through `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            catalog: Arc::new(EventCatalog::default()),
            at: None,
        }
    }

    /// Replace the event catalog used by [`Client::events`].
    pub fn with_catalog(mut self, catalog: EventCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// A view of this client reading state at a fixed block.
    pub fn at(&self, block: Hash) -> Self {
        Self {
            at: Some(block),
            ..self.clone()
        }
    }

    /// A view of this client reading the latest state.
    pub fn latest(&self) -> Self {
        Self {
            at: None,
            ..self.clone()
        }
    }

    /// Block this client reads at, `None` for the latest state.
    pub fn block(&self) -> Option<Hash> {
        self.at
    }

    /// Underlying transport.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Event catalog used by [`Client::events`].
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Decoded events of a block.
    ///
    /// Events missing from the catalog are skipped, see [`EventRecords::skipped`].
    pub async fn events(&self, block: Hash) -> Result<EventRecords> {
        debug!("Fetching events of block {:?}", block);
        let raw = self
            .backend
            .events(block)
            .await
            .map_err(Error::transport("events"))?;
        self.catalog.decode_all(raw)
    }

    /// Raw value of `entry` under `key`. Empty or missing values are
    /// [`Error::NotFound`].
    pub(crate) async fn fetch<K: Encode + ?Sized>(
        &self,
        kind: &'static str,
        entry: &StorageEntry,
        key: &K,
    ) -> Result<Vec<u8>> {
        let storage_key = entry.key(&key.encode());
        trace!(
            "Looking up {} in {}::{} (key 0x{})",
            kind,
            entry.pallet,
            entry.item,
            hex::encode(&storage_key)
        );

        let raw = self
            .backend
            .storage(&storage_key, self.at)
            .await
            .map_err(Error::transport(kind))?;

        match raw {
            Some(raw) if !raw.is_empty() => Ok(raw),
            _ => {
                debug!("{} not found in {}::{}", kind, entry.pallet, entry.item);
                Err(Error::NotFound(kind))
            }
        }
    }

    /// Versioned record stored in `entry` under `key`.
    pub(crate) async fn versioned<T, K>(&self, entry: &StorageEntry, key: &K) -> Result<T>
    where
        T: VersionedRecord,
        K: Encode + ?Sized,
    {
        let raw = self.fetch(T::KIND, entry, key).await?;
        decode_versioned(&raw)
    }

    /// Unversioned value stored in `entry` under `key`.
    pub(crate) async fn plain<T, K>(
        &self,
        kind: &'static str,
        entry: &StorageEntry,
        key: &K,
    ) -> Result<T>
    where
        T: Decode,
        K: Encode + ?Sized,
    {
        let raw = self.fetch(kind, entry, key).await?;
        decode_exact(kind, &raw)
    }
}

/// Encoded form of a name used as a storage map key.
pub(crate) fn name_key<'a>(what: &str, name: &'a str) -> Result<&'a [u8]> {
    if name.is_empty() {
        return Err(Error::Encoding(format!("{} is empty", what)));
    }
    Ok(name.as_bytes())
}
