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
//! In-memory backend for tests.

use async_trait::async_trait;
use parity_scale_codec::Encode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tfchain_primitives::Hash;

use crate::backend::{Backend, RawEvent};
use crate::error::BoxError;
use crate::storage::StorageEntry;

#[derive(Default)]
pub struct MockBackend {
    storage: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
    events: Mutex<HashMap<Hash, Vec<RawEvent>>>,
    requested_at: Mutex<Vec<Option<Hash>>>,
    calls: AtomicUsize,
    failure: Option<&'static str>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend failing every call with `message`.
    pub fn failing(message: &'static str) -> Self {
        Self {
            failure: Some(message),
            ..Default::default()
        }
    }

    pub fn insert_raw(&self, entry: &StorageEntry, key: &(impl Encode + ?Sized), raw: Vec<u8>) {
        self.storage
            .lock()
            .unwrap()
            .insert(entry.key(&key.encode()), raw);
    }

    pub fn insert(&self, entry: &StorageEntry, key: &(impl Encode + ?Sized), value: &impl Encode) {
        self.insert_raw(entry, key, value.encode());
    }

    pub fn insert_events(&self, block: Hash, events: Vec<RawEvent>) {
        self.events.lock().unwrap().insert(block, events);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_at(&self) -> Vec<Option<Hash>> {
        self.requested_at.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn storage(&self, key: &[u8], at: Option<Hash>) -> Result<Option<Vec<u8>>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested_at.lock().unwrap().push(at);
        if let Some(message) = self.failure {
            return Err(message.into());
        }
        Ok(self.storage.lock().unwrap().get(key).cloned())
    }

    async fn events(&self, block: Hash) -> Result<Vec<RawEvent>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure {
            return Err(message.into());
        }
        Ok(self
            .events
            .lock()
            .unwrap()
            .get(&block)
            .cloned()
            .unwrap_or_default())
    }
}
