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
//! Typed decoding of block events.
//!
//! The [`EventCatalog`] maps `pallet -> event name -> decoder`. Events the
//! catalog has no decoder for are skipped, so a block emitting new kinds of
//! events still decodes. Callers can register extra decoders at runtime.
//!
//! # Examples
//!
//! ```
//! use tfchain_client::events::{Event, EventCatalog};
//! use parity_scale_codec::DecodeAll;
//!
//! let mut catalog = EventCatalog::default();
//! // a runtime upgrade renamed the event, the payload stayed the same
//! catalog.register("TfgridModule", "FarmDeletedV2", |input| {
//!     u32::decode_all(input).map(Event::FarmDeleted)
//! });
//! assert!(catalog.contains("TfgridModule", "FarmDeletedV2"));
//! ```

use log::{debug, trace};
use parity_scale_codec::DecodeAll;
use std::collections::{BTreeMap, HashMap};
use tfchain_primitives::{
    events::*, BurnTransaction, CertificationCodes, Consumption, Contract, ContractBill, Entity,
    Farm, FarmingPolicy, Hash, Node, Phase, PricingPolicy, RefundTransaction, Twin,
};

use crate::backend::RawEvent;
use crate::error::{Error, Result};

/// A decoded event of a known kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Event {
    // TfgridModule
    FarmStored(Farm),
    FarmUpdated(Farm),
    FarmDeleted(u32),
    NodeStored(Node),
    NodeUpdated(Node),
    NodeDeleted(u32),
    NodeUptimeReported(NodeUptimeReported),
    NodePublicConfigStored(NodePublicConfigStored),
    EntityStored(Entity),
    EntityUpdated(Entity),
    EntityDeleted(u32),
    TwinStored(Twin),
    TwinUpdated(Twin),
    TwinDeleted(u32),
    TwinEntityStored(TwinEntityStored),
    TwinEntityRemoved(TwinEntityRemoved),
    PricingPolicyStored(PricingPolicy),
    FarmingPolicyStored(FarmingPolicy),
    CertificationCodeStored(CertificationCodes),
    FarmPayoutV2AddressRegistered(FarmPayoutV2AddressRegistered),

    // SmartContractModule
    ContractCreated(Contract),
    ContractUpdated(Contract),
    ContractCanceled(ContractCanceled),
    IPsReserved(ContractIPs),
    IPsFreed(ContractIPs),
    ContractDeployed(ContractDeployed),
    ConsumptionReportReceived(Consumption),
    ContractBilled(ContractBill),

    // BurnModule
    Burned(Burned),

    // TFTBridgeModule
    MintTransactionProposed(MintTransactionProposed),
    MintTransactionVoted(MintTransactionVoted),
    MintCompleted(MintCompleted),
    MintTransactionExpired(MintTransactionExpired),
    BurnTransactionCreated(BurnTransactionCreated),
    BurnTransactionProposed(BurnTransactionCreated),
    BurnTransactionSignatureAdded(BurnTransactionSignatureAdded),
    BurnTransactionReady(u64),
    BurnTransactionProcessed(BurnTransaction),
    BurnTransactionExpired(BurnTransactionCreated),
    RefundTransactionCreated(RefundTransactionCreated),
    RefundTransactionSignatureAdded(RefundTransactionSignatureAdded),
    RefundTransactionReady(Vec<u8>),
    RefundTransactionProcessed(RefundTransaction),
    RefundTransactionExpired(RefundTransactionCreated),
}

/// Decodes the payload of one kind of event.
pub type DecodeFn = fn(&mut &[u8]) -> Result<Event, parity_scale_codec::Error>;

/// A decoded event together with its record metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    /// Block phase the event was emitted in.
    pub phase: Phase,
    /// Emitting pallet.
    pub pallet: String,
    /// Event name.
    pub name: String,
    /// Decoded payload.
    pub event: Event,
    /// Event topics.
    pub topics: Vec<Hash>,
}

/// Decoded events of a block, grouped by kind.
///
/// Within a kind, records keep the order they were emitted in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRecords {
    records: BTreeMap<(String, String), Vec<EventRecord>>,
    skipped: usize,
}

impl EventRecords {
    /// Records of one kind, empty if the block emitted none.
    pub fn get(&self, pallet: &str, name: &str) -> &[EventRecord] {
        self.records
            .get(&(pallet.to_string(), name.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All decoded records, kind by kind.
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.values().flatten()
    }

    /// Number of decoded records.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records skipped because their kind is not in the catalog.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn push(&mut self, record: EventRecord) {
        self.records
            .entry((record.pallet.clone(), record.name.clone()))
            .or_default()
            .push(record);
    }
}

/// Registry of event decoders, keyed by pallet and event name.
#[derive(Clone)]
pub struct EventCatalog {
    decoders: HashMap<&'static str, HashMap<&'static str, DecodeFn>>,
}

macro_rules! register {
    ($catalog:ident, $pallet:literal, { $($name:literal => $variant:ident($payload:ty)),* $(,)? }) => {
        $(
            $catalog.register($pallet, $name, |input| {
                <$payload>::decode_all(input).map(Event::$variant)
            });
        )*
    };
}

impl EventCatalog {
    /// A catalog without any decoder.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Add a decoder, returning the one it replaced.
    pub fn register(
        &mut self,
        pallet: &'static str,
        name: &'static str,
        decode: DecodeFn,
    ) -> Option<DecodeFn> {
        self.decoders.entry(pallet).or_default().insert(name, decode)
    }

    /// Decoder of an event kind.
    pub fn decoder(&self, pallet: &str, name: &str) -> Option<DecodeFn> {
        self.decoders.get(pallet)?.get(name).copied()
    }

    /// Returns `true` if the catalog can decode the event kind.
    pub fn contains(&self, pallet: &str, name: &str) -> bool {
        self.decoder(pallet, name).is_some()
    }

    /// Number of registered event kinds.
    pub fn len(&self) -> usize {
        self.decoders.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no decoder is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode one event. Unknown kinds give `Ok(None)`.
    pub fn decode(&self, raw: &RawEvent) -> Result<Option<EventRecord>> {
        let Some(decode) = self.decoder(&raw.pallet, &raw.name) else {
            trace!("No decoder for {}::{}, skipping", raw.pallet, raw.name);
            return Ok(None);
        };

        let event = decode(&mut &raw.fields[..]).map_err(|e| {
            debug!("Malformed {}::{} event: {}", raw.pallet, raw.name, e);
            Error::decode("event")(e)
        })?;

        Ok(Some(EventRecord {
            phase: raw.phase,
            pallet: raw.pallet.clone(),
            name: raw.name.clone(),
            event,
            topics: raw.topics.clone(),
        }))
    }

    /// Decode the events of a block.
    pub fn decode_all<I>(&self, raw: I) -> Result<EventRecords>
    where
        I: IntoIterator<Item = RawEvent>,
    {
        let mut records = EventRecords::default();
        for event in raw {
            match self.decode(&event)? {
                Some(record) => records.push(record),
                None => records.skipped += 1,
            }
        }
        Ok(records)
    }

    fn register_tfgrid(&mut self) {
        register!(self, "TfgridModule", {
            "FarmStored" => FarmStored(Farm),
            "FarmUpdated" => FarmUpdated(Farm),
            "FarmDeleted" => FarmDeleted(u32),
            "NodeStored" => NodeStored(Node),
            "NodeUpdated" => NodeUpdated(Node),
            "NodeDeleted" => NodeDeleted(u32),
            "NodeUptimeReported" => NodeUptimeReported(NodeUptimeReported),
            "NodePublicConfigStored" => NodePublicConfigStored(NodePublicConfigStored),
            "EntityStored" => EntityStored(Entity),
            "EntityUpdated" => EntityUpdated(Entity),
            "EntityDeleted" => EntityDeleted(u32),
            "TwinStored" => TwinStored(Twin),
            "TwinUpdated" => TwinUpdated(Twin),
            "TwinDeleted" => TwinDeleted(u32),
            "TwinEntityStored" => TwinEntityStored(TwinEntityStored),
            "TwinEntityRemoved" => TwinEntityRemoved(TwinEntityRemoved),
            "PricingPolicyStored" => PricingPolicyStored(PricingPolicy),
            "FarmingPolicyStored" => FarmingPolicyStored(FarmingPolicy),
            "CertificationCodeStored" => CertificationCodeStored(CertificationCodes),
            "FarmPayoutV2AddressRegistered" => FarmPayoutV2AddressRegistered(FarmPayoutV2AddressRegistered),
        });
    }

    fn register_smart_contract(&mut self) {
        register!(self, "SmartContractModule", {
            "ContractCreated" => ContractCreated(Contract),
            "ContractUpdated" => ContractUpdated(Contract),
            "ContractCanceled" => ContractCanceled(ContractCanceled),
            "IPsReserved" => IPsReserved(ContractIPs),
            "IPsFreed" => IPsFreed(ContractIPs),
            "ContractDeployed" => ContractDeployed(ContractDeployed),
            "ConsumptionReportReceived" => ConsumptionReportReceived(Consumption),
            "ContractBilled" => ContractBilled(ContractBill),
        });
    }

    fn register_bridge(&mut self) {
        register!(self, "BurnModule", {
            "BurnTransactionCreated" => Burned(Burned),
        });

        register!(self, "TFTBridgeModule", {
            "MintTransactionProposed" => MintTransactionProposed(MintTransactionProposed),
            "MintTransactionVoted" => MintTransactionVoted(MintTransactionVoted),
            "MintCompleted" => MintCompleted(MintCompleted),
            "MintTransactionExpired" => MintTransactionExpired(MintTransactionExpired),
            "BurnTransactionCreated" => BurnTransactionCreated(BurnTransactionCreated),
            "BurnTransactionProposed" => BurnTransactionProposed(BurnTransactionCreated),
            "BurnTransactionSignatureAdded" => BurnTransactionSignatureAdded(BurnTransactionSignatureAdded),
            "BurnTransactionReady" => BurnTransactionReady(u64),
            "BurnTransactionProcessed" => BurnTransactionProcessed(BurnTransaction),
            "BurnTransactionExpired" => BurnTransactionExpired(BurnTransactionCreated),
            "RefundTransactionCreated" => RefundTransactionCreated(RefundTransactionCreated),
            "RefundTransactionsignatureAdded" => RefundTransactionSignatureAdded(RefundTransactionSignatureAdded),
            "RefundTransactionReady" => RefundTransactionReady(Vec<u8>),
            "RefundTransactionProcessed" => RefundTransactionProcessed(RefundTransaction),
            "RefundTransactionExpired" => RefundTransactionExpired(RefundTransactionCreated),
        });
    }
}

impl Default for EventCatalog {
    /// Catalog of every event this client knows about.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.register_tfgrid();
        catalog.register_smart_contract();
        catalog.register_bridge();
        catalog
    }
}

impl std::fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self
            .decoders
            .iter()
            .flat_map(|(pallet, names)| names.keys().map(move |name| (*pallet, *name)))
            .collect();
        kinds.sort();
        f.debug_struct("EventCatalog").field("kinds", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::Encode;
    use tfchain_primitives::{AccountId, CertificationType, StellarSignature};

    fn raw(pallet: &str, name: &str, fields: Vec<u8>) -> RawEvent {
        RawEvent {
            phase: Phase::ApplyExtrinsic(1),
            pallet: pallet.to_string(),
            name: name.to_string(),
            fields,
            topics: vec![],
        }
    }

    fn farm() -> Farm {
        Farm {
            version: 2,
            id: 12,
            name: "gent01".to_string(),
            twin_id: 40,
            pricing_policy_id: 1,
            certification_type: CertificationType::Diy,
            public_ips: vec![],
            dedicated: false,
        }
    }

    #[test]
    fn test_default_catalog_knows_all_pallets() {
        let catalog = EventCatalog::default();
        assert_eq!(catalog.len(), 44);
        assert!(catalog.contains("TfgridModule", "FarmStored"));
        assert!(catalog.contains("SmartContractModule", "ContractBilled"));
        assert!(catalog.contains("BurnModule", "BurnTransactionCreated"));
        assert!(catalog.contains("TFTBridgeModule", "RefundTransactionsignatureAdded"));
        assert!(!catalog.contains("Balances", "Transfer"));
        assert!(EventCatalog::empty().is_empty());
    }

    #[test]
    fn test_decode_known_event() {
        let catalog = EventCatalog::default();
        let record = catalog
            .decode(&raw("TfgridModule", "FarmStored", farm().encode()))
            .unwrap()
            .unwrap();

        assert_eq!(record.phase, Phase::ApplyExtrinsic(1));
        assert_eq!(record.event, Event::FarmStored(farm()));
    }

    #[test]
    fn test_same_name_in_different_pallets() {
        let catalog = EventCatalog::default();

        let burned = Burned {
            target: AccountId::new([1; 32]),
            balance: 1_000_000,
            block: 77,
            message: "bye".to_string(),
        };
        let record = catalog
            .decode(&raw("BurnModule", "BurnTransactionCreated", burned.encode()))
            .unwrap()
            .unwrap();
        assert_eq!(record.event, Event::Burned(burned));

        let created = BurnTransactionCreated {
            burn_transaction_id: 5,
            target: b"GA2X".to_vec(),
            amount: 100,
        };
        let record = catalog
            .decode(&raw(
                "TFTBridgeModule",
                "BurnTransactionCreated",
                created.encode(),
            ))
            .unwrap()
            .unwrap();
        assert_eq!(record.event, Event::BurnTransactionCreated(created));
    }

    #[test]
    fn test_unknown_event_is_skipped() {
        let catalog = EventCatalog::default();
        assert_eq!(
            catalog
                .decode(&raw("Balances", "Transfer", vec![1, 2, 3]))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_malformed_known_event_fails() {
        let catalog = EventCatalog::default();
        let err = catalog
            .decode(&raw("TfgridModule", "FarmDeleted", vec![1, 0]))
            .unwrap_err();
        assert!(matches!(err, Error::Decode { kind: "event", .. }));
    }

    #[test]
    fn test_decode_all_groups_by_kind() {
        let catalog = EventCatalog::default();
        let signature = StellarSignature {
            signature: vec![9; 64],
            stellar_pub_key: b"GBXX".to_vec(),
        };

        let records = catalog
            .decode_all(vec![
                raw("System", "ExtrinsicSuccess", vec![0; 10]),
                raw("TfgridModule", "FarmDeleted", 3u32.encode()),
                raw("TfgridModule", "FarmStored", farm().encode()),
                raw("TfgridModule", "FarmDeleted", 4u32.encode()),
                raw(
                    "TFTBridgeModule",
                    "BurnTransactionSignatureAdded",
                    BurnTransactionSignatureAdded {
                        burn_transaction_id: 8,
                        signature: signature.clone(),
                    }
                    .encode(),
                ),
            ])
            .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records.skipped(), 1);

        let deleted: Vec<_> = records
            .get("TfgridModule", "FarmDeleted")
            .iter()
            .map(|r| r.event.clone())
            .collect();
        assert_eq!(deleted, vec![Event::FarmDeleted(3), Event::FarmDeleted(4)]);

        assert_eq!(records.get("TfgridModule", "FarmStored").len(), 1);
        assert!(records.get("TfgridModule", "TwinStored").is_empty());
        assert!(records.get("System", "ExtrinsicSuccess").is_empty());
    }

    #[test]
    fn test_register_extends_catalog() {
        let mut catalog = EventCatalog::empty();
        assert!(catalog
            .decode(&raw("TfgridModule", "NodeDeleted", 9u32.encode()))
            .unwrap()
            .is_none());

        let replaced = catalog.register("TfgridModule", "NodeDeleted", |input| {
            u32::decode_all(input).map(Event::NodeDeleted)
        });
        assert!(replaced.is_none());

        let record = catalog
            .decode(&raw("TfgridModule", "NodeDeleted", 9u32.encode()))
            .unwrap()
            .unwrap();
        assert_eq!(record.event, Event::NodeDeleted(9));
    }
}
