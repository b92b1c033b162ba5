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
//! Records stored by the `SmartContractModule` pallet.

use alloc::{string::String, vec::Vec};
use codec::{Decode, Encode};

use crate::{Balance, PublicIP, Timestamp, Version};

/// A deployment contract between a twin and the grid.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Contract {
    /// Schema version.
    pub version: Version,
    /// Contract id.
    pub contract_id: u64,
    /// Twin paying for the contract.
    pub twin_id: u32,
    /// What the contract reserves.
    pub contract_type: ContractType,
    /// Lifecycle state.
    pub state: ContractState,
}

/// Kind of a contract.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub enum ContractType {
    /// A workload deployed on a node.
    NodeContract(NodeContract),
    /// A reserved gateway name.
    NameContract(NameContract),
}

/// Contract for a workload on a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct NodeContract {
    /// Node hosting the workload.
    pub node_id: u32,
    /// Hash of the deployment document.
    pub deployment_hash: String,
    /// Opaque deployment metadata.
    pub deployment_data: String,
    /// Number of public IPs requested.
    pub public_ips_count: u32,
    /// Public IPs reserved for the contract.
    pub public_ips: Vec<PublicIP>,
}

/// Contract for a gateway name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct NameContract {
    /// Reserved name.
    pub name: String,
}

/// Lifecycle state of a contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub enum ContractState {
    /// Active.
    #[default]
    Created,
    /// Canceled by its owner.
    Deleted,
    /// Suspended because the owner can't pay.
    OutOfFunds,
}

/// Resource consumption reported by a node for a contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Consumption {
    /// Contract id.
    pub contract_id: u64,
    /// Report time.
    pub timestamp: Timestamp,
    /// Used cores.
    pub cru: u64,
    /// Used SSD bytes.
    pub sru: u64,
    /// Used HDD bytes.
    pub hru: u64,
    /// Used memory bytes.
    pub mru: u64,
    /// Used network bytes.
    pub nru: u64,
}

/// Discount applied on a bill, based on the payer's balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub enum DiscountLevel {
    /// No discount.
    #[default]
    None,
    /// Default discount.
    Default,
    /// Bronze discount.
    Bronze,
    /// Silver discount.
    Silver,
    /// Gold discount.
    Gold,
}

/// A bill issued for a contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct ContractBill {
    /// Contract id.
    pub contract_id: u64,
    /// Billing time.
    pub timestamp: Timestamp,
    /// Discount applied.
    pub discount_level: DiscountLevel,
    /// Billed amount.
    pub amount_billed: Balance,
}

impl Contract {
    /// Node hosting the contract, if it's a node contract.
    pub fn node_id(&self) -> Option<u32> {
        match &self.contract_type {
            ContractType::NodeContract(c) => Some(c.node_id),
            ContractType::NameContract(_) => None,
        }
    }
}
