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
//! Lookups of `TFTBridgeModule` storage.
//!
//! Mint and refund transactions are keyed by the hash of the Stellar
//! transaction that triggered them, burn transactions by their numeric id.
//! Pending and executed transactions live in separate maps.

use tfchain_primitives::{BurnTransaction, MintTransaction, RefundTransaction};

use crate::backend::Backend;
use crate::client::{name_key, Client};
use crate::error::Result;
use crate::storage;

impl<B: Backend> Client<B> {
    /// Get a pending mint transaction.
    pub async fn mint_transaction(&self, tx_hash: &str) -> Result<MintTransaction> {
        let key = name_key("transaction hash", tx_hash)?;
        self.plain("mint transaction", &storage::MINT_TRANSACTIONS, key)
            .await
    }

    /// Get an executed mint transaction.
    pub async fn executed_mint_transaction(&self, tx_hash: &str) -> Result<MintTransaction> {
        let key = name_key("transaction hash", tx_hash)?;
        self.plain(
            "executed mint transaction",
            &storage::EXECUTED_MINT_TRANSACTIONS,
            key,
        )
        .await
    }

    /// Returns `true` once the mint of a Stellar deposit was executed.
    pub async fn is_mint_completed(&self, tx_hash: &str) -> Result<bool> {
        match self.executed_mint_transaction(tx_hash).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Get a pending burn transaction.
    pub async fn burn_transaction(&self, id: u64) -> Result<BurnTransaction> {
        self.plain("burn transaction", &storage::BURN_TRANSACTIONS, &id)
            .await
    }

    /// Get an executed burn transaction.
    pub async fn executed_burn_transaction(&self, id: u64) -> Result<BurnTransaction> {
        self.plain(
            "executed burn transaction",
            &storage::EXECUTED_BURN_TRANSACTIONS,
            &id,
        )
        .await
    }

    /// Get a pending refund transaction.
    pub async fn refund_transaction(&self, tx_hash: &str) -> Result<RefundTransaction> {
        let key = name_key("transaction hash", tx_hash)?;
        self.plain("refund transaction", &storage::REFUND_TRANSACTIONS, key)
            .await
    }

    /// Get an executed refund transaction.
    pub async fn executed_refund_transaction(&self, tx_hash: &str) -> Result<RefundTransaction> {
        let key = name_key("transaction hash", tx_hash)?;
        self.plain(
            "executed refund transaction",
            &storage::EXECUTED_REFUND_TRANSACTIONS,
            key,
        )
        .await
    }
}
