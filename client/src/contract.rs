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
//! Lookups of `SmartContractModule` storage.

use log::debug;
use tfchain_primitives::Contract;

use crate::backend::Backend;
use crate::client::{name_key, Client};
use crate::error::Result;
use crate::storage;

impl<B: Backend> Client<B> {
    /// Get a contract by id.
    pub async fn contract(&self, id: u64) -> Result<Contract> {
        debug!("Getting contract {}", id);
        self.versioned(&storage::CONTRACTS, &id).await
    }

    /// Get the id of the name contract registering `name`.
    pub async fn contract_id_by_name(&self, name: &str) -> Result<u64> {
        let key = name_key("contract name", name)?;
        self.plain("contract", &storage::CONTRACT_ID_BY_NAME, key)
            .await
    }
}
