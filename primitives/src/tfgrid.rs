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
//! Records stored by the `TfgridModule` pallet.

use alloc::{string::String, vec::Vec};
use codec::{Decode, Encode};

use crate::{AccountId, CertificationType, Timestamp, Version};

/// A legal entity (company or person) registered on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Entity {
    /// Schema version.
    pub version: Version,
    /// Entity id.
    pub id: u32,
    /// Unique entity name.
    pub name: String,
    /// Country of registration.
    pub country: String,
    /// City of registration.
    pub city: String,
    /// Account owning the entity.
    pub account: AccountId,
}

/// A farm: a group of nodes run by one twin.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Farm {
    /// Schema version.
    pub version: Version,
    /// Farm id.
    pub id: u32,
    /// Unique farm name.
    pub name: String,
    /// Twin owning the farm.
    pub twin_id: u32,
    /// Pricing policy applied to the farm.
    pub pricing_policy_id: u32,
    /// Certification kind.
    pub certification_type: CertificationType,
    /// Public IPs the farm offers to deployments.
    pub public_ips: Vec<PublicIP>,
    /// Whether the farm only rents out whole nodes.
    pub dedicated: bool,
}

/// A public IP attached to a farm.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct PublicIP {
    /// Address in CIDR notation.
    pub ip: String,
    /// Gateway of the address.
    pub gateway: String,
    /// Contract currently using the address, `0` when free.
    pub contract_id: u64,
}

impl PublicIP {
    /// Returns `true` if no contract reserved this address.
    pub fn is_free(&self) -> bool {
        self.contract_id == 0
    }
}

/// Capacity of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Resources {
    /// HDD capacity in bytes.
    pub hru: u64,
    /// SSD capacity in bytes.
    pub sru: u64,
    /// Number of cores.
    pub cru: u64,
    /// Memory in bytes.
    pub mru: u64,
}

/// Geographic location of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Location {
    /// Longitude, as reported by the node.
    pub longitude: String,
    /// Latitude, as reported by the node.
    pub latitude: String,
}

/// Public network configuration of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct PublicConfig {
    /// IPv4 address in CIDR notation.
    pub ipv4: String,
    /// IPv6 address in CIDR notation.
    pub ipv6: String,
    /// IPv4 gateway.
    pub gw4: String,
    /// IPv6 gateway.
    pub gw6: String,
    /// Domain served by the node gateway.
    pub domain: String,
}

/// A network interface of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Interface {
    /// Interface name.
    pub name: String,
    /// Hardware address.
    pub mac: String,
    /// Addresses assigned to the interface.
    pub ips: Vec<String>,
}

/// A node registered in a farm.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Node {
    /// Schema version.
    pub version: Version,
    /// Node id.
    pub id: u32,
    /// Farm the node belongs to.
    pub farm_id: u32,
    /// Twin of the node.
    pub twin_id: u32,
    /// Total capacity.
    pub resources: Resources,
    /// Where the node is.
    pub location: Location,
    /// Country the node is in.
    pub country: String,
    /// City the node is in.
    pub city: String,
    /// Public network configuration, if any.
    pub public_config: Option<PublicConfig>,
    /// Registration time.
    pub created: Timestamp,
    /// Farming policy applied to the node.
    pub farming_policy_id: u32,
    /// Network interfaces.
    pub interfaces: Vec<Interface>,
    /// Certification kind.
    pub certification_type: CertificationType,
    /// Whether the node booted with secure boot.
    pub secure_boot: bool,
    /// Whether the node runs virtualized.
    pub virtualized: bool,
    /// Hardware serial number.
    pub serial_number: String,
}

/// Proof that a twin belongs to an entity.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct EntityProof {
    /// Entity id.
    pub entity_id: u32,
    /// Entity signature over the twin.
    pub signature: String,
}

/// A digital twin: the on-chain identity of a user or a node.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Twin {
    /// Schema version.
    pub version: Version,
    /// Twin id.
    pub id: u32,
    /// Account owning the twin.
    pub account: AccountId,
    /// Yggdrasil address of the twin.
    pub ip: String,
    /// Entities the twin is linked to.
    pub entities: Vec<EntityProof>,
}

/// Unit a [`Policy`] value is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub enum Unit {
    /// Bytes.
    #[default]
    Bytes,
    /// Kilobytes.
    Kilobytes,
    /// Megabytes.
    Megabytes,
    /// Gigabytes.
    Gigabytes,
    /// Terabytes.
    Terrabytes,
}

/// One price entry of a pricing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Policy {
    /// Price per unit.
    pub value: u32,
    /// Unit of the price.
    pub unit: Unit,
}

/// Prices of grid resources.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct PricingPolicy {
    /// Schema version.
    pub version: Version,
    /// Policy id.
    pub id: u32,
    /// Policy name.
    pub name: String,
    /// Storage unit price.
    pub su: Policy,
    /// Compute unit price.
    pub cu: Policy,
    /// Network unit price.
    pub nu: Policy,
    /// Public IP unit price.
    pub ipu: Policy,
    /// Unique name price.
    pub unique_name: Policy,
    /// Domain name price.
    pub domain_name: Policy,
    /// Account receiving the foundation share.
    pub foundation_account: AccountId,
    /// Account receiving the certified sales share.
    pub certified_sales_account: AccountId,
}

/// Rewards paid to farmers for their capacity.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct FarmingPolicy {
    /// Schema version.
    pub version: Version,
    /// Policy id.
    pub id: u32,
    /// Policy name.
    pub name: String,
    /// Reward per compute unit.
    pub cu: u32,
    /// Reward per storage unit.
    pub su: u32,
    /// Reward per network unit.
    pub nu: u32,
    /// Reward per public IPv4.
    pub ipv4: u32,
    /// Creation time.
    pub timestamp: Timestamp,
    /// Certification kind the policy applies to.
    pub certification_type: CertificationType,
}

/// A certification code farms and nodes can be granted.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct CertificationCodes {
    /// Schema version.
    pub version: Version,
    /// Code id.
    pub id: u32,
    /// Code name.
    pub name: String,
    /// Free form description.
    pub description: String,
    /// Raw code type byte.
    pub certification_code_type: u8,
}
