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
//! Storage key derivation.
//!
//! A map entry lives under
//! `twox_128(pallet) ++ twox_128(item) ++ hasher(scale_encoded_key)`.
//! The hasher is fixed per storage item by the pallet declaration, every map
//! this client reads is listed below with the hasher the chain uses for it.

use sp_crypto_hashing::{blake2_128, twox_128, twox_64};

/// Hasher applied to the encoded key of a storage map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum StorageHasher {
    /// `blake2_128(key) ++ key`.
    Blake2_128Concat,
    /// `twox_64(key) ++ key`.
    Twox64Concat,
    /// `key`.
    Identity,
}

impl StorageHasher {
    /// Hash an encoded key.
    pub fn hash(&self, key: &[u8]) -> Vec<u8> {
        match self {
            StorageHasher::Blake2_128Concat => [&blake2_128(key)[..], key].concat(),
            StorageHasher::Twox64Concat => [&twox_64(key)[..], key].concat(),
            StorageHasher::Identity => key.to_vec(),
        }
    }
}

/// A storage map of some pallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageEntry {
    /// Pallet name, as declared in the runtime.
    pub pallet: &'static str,
    /// Storage item name.
    pub item: &'static str,
    /// Key hasher of the map.
    pub hasher: StorageHasher,
}

impl StorageEntry {
    const fn blake2(pallet: &'static str, item: &'static str) -> Self {
        Self {
            pallet,
            item,
            hasher: StorageHasher::Blake2_128Concat,
        }
    }

    /// Prefix shared by every key of this map.
    pub fn prefix(&self) -> Vec<u8> {
        [twox_128(self.pallet.as_bytes()), twox_128(self.item.as_bytes())].concat()
    }

    /// Storage key of the value stored under a SCALE encoded map key.
    pub fn key(&self, encoded_key: &[u8]) -> Vec<u8> {
        let mut key = self.prefix();
        key.extend(self.hasher.hash(encoded_key));
        key
    }
}

const TFGRID: &str = "TfgridModule";
const SMART_CONTRACT: &str = "SmartContractModule";
const TFT_BRIDGE: &str = "TFTBridgeModule";

/// `TfgridModule::Entities`: `u32 -> Entity`.
pub const ENTITIES: StorageEntry = StorageEntry::blake2(TFGRID, "Entities");
/// `TfgridModule::EntityIdByName`: `Vec<u8> -> u32`.
pub const ENTITY_ID_BY_NAME: StorageEntry = StorageEntry::blake2(TFGRID, "EntityIdByName");
/// `TfgridModule::Farms`: `u32 -> Farm`.
pub const FARMS: StorageEntry = StorageEntry::blake2(TFGRID, "Farms");
/// `TfgridModule::FarmIdByName`: `Vec<u8> -> u32`.
pub const FARM_ID_BY_NAME: StorageEntry = StorageEntry::blake2(TFGRID, "FarmIdByName");
/// `TfgridModule::Nodes`: `u32 -> Node`.
pub const NODES: StorageEntry = StorageEntry::blake2(TFGRID, "Nodes");
/// `TfgridModule::NodeIdByTwinID`: `u32 -> u32`.
pub const NODE_ID_BY_TWIN_ID: StorageEntry = StorageEntry::blake2(TFGRID, "NodeIdByTwinID");
/// `TfgridModule::Twins`: `u32 -> Twin`.
pub const TWINS: StorageEntry = StorageEntry::blake2(TFGRID, "Twins");
/// `TfgridModule::TwinIdByAccountID`: `AccountId -> u32`.
pub const TWIN_ID_BY_ACCOUNT_ID: StorageEntry =
    StorageEntry::blake2(TFGRID, "TwinIdByAccountID");
/// `TfgridModule::PricingPolicies`: `u32 -> PricingPolicy`.
pub const PRICING_POLICIES: StorageEntry = StorageEntry::blake2(TFGRID, "PricingPolicies");
/// `TfgridModule::FarmingPoliciesMap`: `u32 -> FarmingPolicy`.
pub const FARMING_POLICIES: StorageEntry = StorageEntry::blake2(TFGRID, "FarmingPoliciesMap");
/// `TfgridModule::CertificationCodes`: `u32 -> CertificationCodes`.
pub const CERTIFICATION_CODES: StorageEntry =
    StorageEntry::blake2(TFGRID, "CertificationCodes");

/// `SmartContractModule::Contracts`: `u64 -> Contract`.
pub const CONTRACTS: StorageEntry = StorageEntry::blake2(SMART_CONTRACT, "Contracts");
/// `SmartContractModule::ContractIDByNameRegistration`: `Vec<u8> -> u64`.
pub const CONTRACT_ID_BY_NAME: StorageEntry =
    StorageEntry::blake2(SMART_CONTRACT, "ContractIDByNameRegistration");

/// `TFTBridgeModule::MintTransactions`: `Vec<u8> -> MintTransaction`.
pub const MINT_TRANSACTIONS: StorageEntry = StorageEntry::blake2(TFT_BRIDGE, "MintTransactions");
/// `TFTBridgeModule::ExecutedMintTransactions`: `Vec<u8> -> MintTransaction`.
pub const EXECUTED_MINT_TRANSACTIONS: StorageEntry =
    StorageEntry::blake2(TFT_BRIDGE, "ExecutedMintTransactions");
/// `TFTBridgeModule::BurnTransactions`: `u64 -> BurnTransaction`.
pub const BURN_TRANSACTIONS: StorageEntry = StorageEntry::blake2(TFT_BRIDGE, "BurnTransactions");
/// `TFTBridgeModule::ExecutedBurnTransactions`: `u64 -> BurnTransaction`.
pub const EXECUTED_BURN_TRANSACTIONS: StorageEntry =
    StorageEntry::blake2(TFT_BRIDGE, "ExecutedBurnTransactions");
/// `TFTBridgeModule::RefundTransactions`: `Vec<u8> -> RefundTransaction`.
pub const REFUND_TRANSACTIONS: StorageEntry =
    StorageEntry::blake2(TFT_BRIDGE, "RefundTransactions");
/// `TFTBridgeModule::ExecutedRefundTransactions`: `Vec<u8> -> RefundTransaction`.
pub const EXECUTED_REFUND_TRANSACTIONS: StorageEntry =
    StorageEntry::blake2(TFT_BRIDGE, "ExecutedRefundTransactions");

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use parity_scale_codec::Encode;

    const SYSTEM_ACCOUNT: StorageEntry = StorageEntry {
        pallet: "System",
        item: "Account",
        hasher: StorageHasher::Blake2_128Concat,
    };

    #[test]
    fn test_prefix_matches_well_known_system_account() {
        assert_eq!(
            SYSTEM_ACCOUNT.prefix(),
            hex!("26aa394eea5630e07c48ae0c9558cef7b99d880ec681799c0cf30e8886371da9").to_vec()
        );
    }

    #[test]
    fn test_farm_key() {
        assert_eq!(
            FARMS.key(&1u32.encode()),
            hex!(
                "19a2526838feefd7695a3b5715b415b1" "991668ecbcb25e4ae6f380a2cc63b670"
                "d82c12285b5d4551f88e8f6e7eb52b81" "01000000"
            )
            .to_vec()
        );
    }

    #[test]
    fn test_blake2_concat_keeps_key_readable() {
        let encoded = 7u32.encode();
        let key = FARMS.key(&encoded);

        assert_eq!(key.len(), 32 + 16 + encoded.len());
        assert_eq!(&key[..32], &FARMS.prefix()[..]);
        assert_eq!(&key[32..48], &blake2_128(&encoded)[..]);
        assert_eq!(&key[48..], &encoded[..]);
    }

    #[test]
    fn test_hashers() {
        let encoded = 42u64.encode();
        assert_eq!(StorageHasher::Identity.hash(&encoded), encoded);
        assert_eq!(StorageHasher::Twox64Concat.hash(&encoded).len(), 8 + 8);
        assert_eq!(&StorageHasher::Twox64Concat.hash(&encoded)[8..], &encoded[..]);
    }

    #[test]
    fn test_distinct_ids_give_distinct_keys() {
        assert_ne!(FARMS.key(&1u32.encode()), FARMS.key(&2u32.encode()));
        assert_ne!(FARMS.key(&1u32.encode()), NODES.key(&1u32.encode()));
    }
}
