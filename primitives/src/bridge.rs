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
//! Records stored by the `TFTBridgeModule` pallet.
//!
//! The bridge moves TFT between the Stellar network and the grid chain. None of
//! these records is versioned.

use alloc::{string::String, vec::Vec};
use codec::{Decode, Encode};

use crate::{AccountId, BlockNumber};

/// A mint of TFT on the grid chain, voted on by the bridge validators.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MintTransaction {
    /// Amount to mint.
    pub amount: u64,
    /// Receiving account.
    pub target: AccountId,
    /// Block the transaction was proposed at.
    pub block: BlockNumber,
    /// Validator votes collected so far.
    pub votes: u32,
}

/// A signature of a bridge validator over a Stellar transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct StellarSignature {
    /// Signature bytes.
    pub signature: Vec<u8>,
    /// Stellar public key of the signer.
    pub stellar_pub_key: Vec<u8>,
}

/// A burn of TFT on the grid chain, paid out on Stellar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct BurnTransaction {
    /// Block the burn happened at.
    pub block: BlockNumber,
    /// Amount burned.
    pub amount: u64,
    /// Stellar address receiving the funds.
    pub target: String,
    /// Validator signatures collected so far.
    pub signatures: Vec<StellarSignature>,
    /// Stellar account sequence number to use.
    pub sequence_number: u64,
}

/// A refund on Stellar of a deposit the bridge could not mint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct RefundTransaction {
    /// Block the refund was created at.
    pub block: BlockNumber,
    /// Amount to refund.
    pub amount: u64,
    /// Stellar address receiving the funds.
    pub target: String,
    /// Hash of the Stellar deposit being refunded.
    pub tx_hash: String,
    /// Validator signatures collected so far.
    pub signatures: Vec<StellarSignature>,
    /// Stellar account sequence number to use.
    pub sequence_number: u64,
}
