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
//! Low-level types mirroring the ThreeFold grid chain storage.
//!
//! Every record here is a plain snapshot of on-chain state. Records that live in
//! versioned storage carry their schema version as the leading `u32` field, the
//! client reads it before choosing a decode path.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bridge;
pub mod certification;
pub mod contract;
pub mod events;
pub mod tfgrid;

pub use bridge::{BurnTransaction, MintTransaction, RefundTransaction, StellarSignature};
pub use certification::CertificationType;
pub use contract::{
    Consumption, Contract, ContractBill, ContractState, ContractType, DiscountLevel,
    NameContract, NodeContract,
};
pub use tfgrid::{
    CertificationCodes, Entity, EntityProof, Farm, FarmingPolicy, Interface, Location, Node,
    Policy, PricingPolicy, PublicConfig, PublicIP, Resources, Twin, Unit,
};

use codec::{Decode, Encode};

/// Some way of identifying an account on the chain.
pub type AccountId = sp_core::crypto::AccountId32;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// An index to a block.
pub type BlockNumber = u32;

/// Balance of an account.
pub type Balance = u128;

/// Schema version stored in front of every versioned record.
pub type Version = u32;

/// A timestamp: seconds since the unix epoch as stored by the grid pallets.
pub type Timestamp = u64;

/// A phase of a block's execution an event was emitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub enum Phase {
    /// Applying an extrinsic.
    ApplyExtrinsic(u32),
    /// Finalizing the block.
    Finalization,
    /// Initializing the block.
    Initialization,
}
