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
//! Lookups of `TfgridModule` storage.

use log::debug;
use sp_core::crypto::Ss58Codec;
use tfchain_primitives::{
    AccountId, CertificationCodes, Entity, Farm, FarmingPolicy, Node, PricingPolicy, Twin,
};

use crate::backend::Backend;
use crate::client::{name_key, Client};
use crate::error::{Error, Result};
use crate::storage;

impl<B: Backend> Client<B> {
    /// Get an entity by id.
    pub async fn entity(&self, id: u32) -> Result<Entity> {
        debug!("Getting entity {}", id);
        self.versioned(&storage::ENTITIES, &id).await
    }

    /// Get the id of an entity by its name.
    pub async fn entity_id_by_name(&self, name: &str) -> Result<u32> {
        let key = name_key("entity name", name)?;
        self.plain("entity", &storage::ENTITY_ID_BY_NAME, key).await
    }

    /// Get a farm by id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use tfchain_client::{Client, RpcBackend};
    /// # async fn example(client: Client<RpcBackend>) -> tfchain_client::Result<()> {
    /// let farm = client.farm(1).await?;
    /// for ip in farm.public_ips.iter().filter(|ip| ip.is_free()) {
    ///     println!("{} via {}", ip.ip, ip.gateway);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn farm(&self, id: u32) -> Result<Farm> {
        debug!("Getting farm {}", id);
        self.versioned(&storage::FARMS, &id).await
    }

    /// Get the id of a farm by its name.
    pub async fn farm_id_by_name(&self, name: &str) -> Result<u32> {
        let key = name_key("farm name", name)?;
        self.plain("farm", &storage::FARM_ID_BY_NAME, key).await
    }

    /// Get a node by id.
    pub async fn node(&self, id: u32) -> Result<Node> {
        debug!("Getting node {}", id);
        self.versioned(&storage::NODES, &id).await
    }

    /// Get the id of the node owned by a twin.
    pub async fn node_id_by_twin(&self, twin_id: u32) -> Result<u32> {
        self.plain("node", &storage::NODE_ID_BY_TWIN_ID, &twin_id)
            .await
    }

    /// Get a twin by id.
    pub async fn twin(&self, id: u32) -> Result<Twin> {
        debug!("Getting twin {}", id);
        self.versioned(&storage::TWINS, &id).await
    }

    /// Get the id of the twin of an account.
    pub async fn twin_id_by_account(&self, account: &AccountId) -> Result<u32> {
        self.plain("twin", &storage::TWIN_ID_BY_ACCOUNT_ID, account)
            .await
    }

    /// Get the id of the twin of an SS58 encoded address.
    pub async fn twin_id_by_address(&self, address: &str) -> Result<u32> {
        let account = AccountId::from_ss58check(address)
            .map_err(|e| Error::Encoding(format!("invalid address {}: {:?}", address, e)))?;
        self.twin_id_by_account(&account).await
    }

    /// Get a pricing policy by id.
    pub async fn pricing_policy(&self, id: u32) -> Result<PricingPolicy> {
        self.versioned(&storage::PRICING_POLICIES, &id).await
    }

    /// Get a farming policy by id.
    pub async fn farming_policy(&self, id: u32) -> Result<FarmingPolicy> {
        self.versioned(&storage::FARMING_POLICIES, &id).await
    }

    /// Get certification codes by id.
    pub async fn certification_codes(&self, id: u32) -> Result<CertificationCodes> {
        self.versioned(&storage::CERTIFICATION_CODES, &id).await
    }
}
