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
//! Payloads of chain events carrying more than one field.
//!
//! Events whose payload is a single record or id (for example `FarmStored` or
//! `FarmDeleted`) decode straight into that record and have no type here.

use alloc::{string::String, vec::Vec};
use codec::{Decode, Encode};

use crate::{
    AccountId, Balance, BlockNumber, MintTransaction, PublicConfig, PublicIP, StellarSignature,
    Timestamp,
};

/// `TfgridModule::NodeUptimeReported`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct NodeUptimeReported {
    /// Reporting node.
    pub node: u32,
    /// Report time.
    pub timestamp: Timestamp,
    /// Uptime in seconds.
    pub uptime: u64,
}

/// `TfgridModule::NodePublicConfigStored`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct NodePublicConfigStored {
    /// Configured node.
    pub node: u32,
    /// New configuration.
    pub config: PublicConfig,
}

/// `TfgridModule::TwinEntityStored`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct TwinEntityStored {
    /// Twin id.
    pub twin: u32,
    /// Entity id.
    pub entity: u32,
    /// Entity signature over the twin.
    pub signature: Vec<u8>,
}

/// `TfgridModule::TwinEntityRemoved`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct TwinEntityRemoved {
    /// Twin id.
    pub twin: u32,
    /// Entity id.
    pub entity: u32,
}

/// `TfgridModule::FarmPayoutV2AddressRegistered`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct FarmPayoutV2AddressRegistered {
    /// Farm id.
    pub farm: u32,
    /// Stellar payout address.
    pub address: String,
}

/// `SmartContractModule::ContractCanceled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct ContractCanceled {
    /// Canceled contract.
    pub contract_id: u64,
}

/// `SmartContractModule::IPsReserved` and `SmartContractModule::IPsFreed`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct ContractIPs {
    /// Contract the addresses belong to.
    pub contract_id: u64,
    /// Reserved or released addresses.
    pub public_ips: Vec<PublicIP>,
}

/// `SmartContractModule::ContractDeployed`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct ContractDeployed {
    /// Deployed contract.
    pub contract_id: u64,
    /// Deploying account.
    pub account: AccountId,
}

/// `BurnModule::BurnTransactionCreated`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Burned {
    /// Burning account.
    pub target: AccountId,
    /// Burned amount.
    pub balance: Balance,
    /// Block of the burn.
    pub block: BlockNumber,
    /// Free form message.
    pub message: String,
}

/// `TFTBridgeModule::MintTransactionProposed`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MintTransactionProposed {
    /// Stellar deposit hash.
    pub tx_hash: String,
    /// Receiving account.
    pub target: AccountId,
    /// Amount to mint.
    pub amount: u64,
}

/// `TFTBridgeModule::MintTransactionVoted`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MintTransactionVoted {
    /// Stellar deposit hash.
    pub tx_hash: String,
}

/// `TFTBridgeModule::MintCompleted`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MintCompleted {
    /// The executed mint.
    pub mint_transaction: MintTransaction,
}

/// `TFTBridgeModule::MintTransactionExpired`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MintTransactionExpired {
    /// Stellar deposit hash.
    pub tx_hash: String,
    /// Amount that was to be minted.
    pub amount: u64,
    /// Receiving account.
    pub target: AccountId,
}

/// `TFTBridgeModule::BurnTransactionCreated`, `BurnTransactionProposed` and
/// `BurnTransactionExpired`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct BurnTransactionCreated {
    /// Burn id.
    pub burn_transaction_id: u64,
    /// Stellar address receiving the funds.
    pub target: Vec<u8>,
    /// Amount burned.
    pub amount: u64,
}

/// `TFTBridgeModule::BurnTransactionSignatureAdded`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct BurnTransactionSignatureAdded {
    /// Burn id.
    pub burn_transaction_id: u64,
    /// Added validator signature.
    pub signature: StellarSignature,
}

/// `TFTBridgeModule::RefundTransactionCreated` and `RefundTransactionExpired`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct RefundTransactionCreated {
    /// Stellar deposit hash.
    pub refund_transaction_hash: Vec<u8>,
    /// Stellar address receiving the funds.
    pub target: Vec<u8>,
    /// Amount to refund.
    pub amount: u64,
}

/// `TFTBridgeModule::RefundTransactionsignatureAdded`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct RefundTransactionSignatureAdded {
    /// Stellar deposit hash.
    pub refund_transaction_hash: Vec<u8>,
    /// Added validator signature.
    pub signature: StellarSignature,
}
