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
//! Version dispatch for versioned storage records.
//!
//! Each record lists the versions it can decode in an explicit `match`. A new
//! on-chain version needs a new arm here; there is no fallback path.

use log::trace;
use parity_scale_codec::{Decode, DecodeAll};
use tfchain_primitives::{
    CertificationCodes, Contract, Entity, Farm, FarmingPolicy, Node, PricingPolicy, Twin, Version,
};

use crate::error::{Error, Result};

/// A storage record prefixed with its schema version.
pub trait VersionedRecord: Decode + Sized {
    /// Record name used in errors.
    const KIND: &'static str;

    /// Decode `raw`, which was stored at `version`.
    fn decode_version(version: Version, raw: &[u8]) -> Result<Self>;
}

/// Read the version field at the start of a payload.
pub fn version_of(kind: &'static str, raw: &[u8]) -> Result<Version> {
    Version::decode(&mut &raw[..]).map_err(Error::decode(kind))
}

/// Decode a payload that must be consumed completely.
pub fn decode_exact<T: Decode>(kind: &'static str, raw: &[u8]) -> Result<T> {
    T::decode_all(&mut &raw[..]).map_err(Error::decode(kind))
}

/// Decode the fields of a record from the front of a payload.
///
/// Bytes past the last field are left alone: a later version of a layout may
/// append fields the record does not know about.
pub fn decode_record<T: Decode>(kind: &'static str, raw: &[u8]) -> Result<T> {
    T::decode(&mut &raw[..]).map_err(Error::decode(kind))
}

/// Decode a raw storage value of a versioned record.
///
/// An empty payload is [`Error::NotFound`], a version the record does not
/// list is [`Error::UnknownVersion`].
pub fn decode_versioned<T: VersionedRecord>(raw: &[u8]) -> Result<T> {
    if raw.is_empty() {
        return Err(Error::NotFound(T::KIND));
    }

    let version = version_of(T::KIND, raw)?;
    trace!("Decoding {} stored at version {}", T::KIND, version);
    T::decode_version(version, raw)
}

fn unknown<T>(kind: &'static str, version: Version) -> Result<T> {
    Err(Error::UnknownVersion { kind, version })
}

impl VersionedRecord for Entity {
    const KIND: &'static str = "entity";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for Farm {
    const KIND: &'static str = "farm";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        // v1 and v2 share one layout
        match version {
            1 | 2 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for Node {
    const KIND: &'static str = "node";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for Twin {
    const KIND: &'static str = "twin";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for PricingPolicy {
    const KIND: &'static str = "pricing policy";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for FarmingPolicy {
    const KIND: &'static str = "farming policy";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for CertificationCodes {
    const KIND: &'static str = "certification codes";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

impl VersionedRecord for Contract {
    const KIND: &'static str = "contract";

    fn decode_version(version: Version, raw: &[u8]) -> Result<Self> {
        match version {
            1 => decode_record(Self::KIND, raw),
            v => unknown(Self::KIND, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::Encode;
    use tfchain_primitives::{AccountId, CertificationType};

    fn entity(version: Version) -> Entity {
        Entity {
            version,
            id: 3,
            name: "ThreeFold".to_string(),
            country: "Belgium".to_string(),
            city: "Lochristi".to_string(),
            account: AccountId::new([7; 32]),
        }
    }

    fn farm(version: Version) -> Farm {
        Farm {
            version,
            id: 1,
            name: "freefarm".to_string(),
            twin_id: 2,
            pricing_policy_id: 1,
            certification_type: CertificationType::Certified,
            public_ips: vec![],
            dedicated: true,
        }
    }

    #[test]
    fn test_empty_payload_is_not_found() {
        let err = decode_versioned::<Entity>(&[]).unwrap_err();
        assert!(matches!(err, Error::NotFound("entity")));
    }

    #[test]
    fn test_version_probe_reads_leading_u32() {
        assert_eq!(version_of("farm", &farm(2).encode()).unwrap(), 2);
        assert!(matches!(
            version_of("farm", &[1, 0]),
            Err(Error::Decode { kind: "farm", .. })
        ));
    }

    #[test]
    fn test_supported_version_decodes() {
        let raw = entity(1).encode();
        assert_eq!(decode_versioned::<Entity>(&raw).unwrap(), entity(1));
    }

    #[test]
    fn test_unsupported_versions_are_rejected() {
        for version in [0, 2, 3, u32::MAX] {
            let raw = entity(version).encode();
            match decode_versioned::<Entity>(&raw) {
                Err(Error::UnknownVersion { kind, version: v }) => {
                    assert_eq!(kind, "entity");
                    assert_eq!(v, version);
                }
                other => panic!("expected unknown version, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_farm_accepts_both_legacy_versions() {
        for version in [1, 2] {
            let decoded = decode_versioned::<Farm>(&farm(version).encode()).unwrap();
            assert_eq!(decoded, farm(version));
        }
        assert!(decode_versioned::<Farm>(&farm(3).encode())
            .unwrap_err()
            .is_unknown_version());
    }

    #[test]
    fn test_truncated_payload_is_decode_error() {
        let raw = farm(1).encode();
        let err = decode_versioned::<Farm>(&raw[..raw.len() - 1]).unwrap_err();
        assert!(matches!(err, Error::Decode { kind: "farm", .. }));
    }

    #[test]
    fn test_extended_farm_keeps_common_fields() {
        let mut raw = farm(2).encode();
        raw.extend_from_slice(&[1, 5, 0, 0, 0]);
        assert_eq!(decode_versioned::<Farm>(&raw).unwrap(), farm(2));
    }

    #[test]
    fn test_node_only_accepts_first_layout() {
        let raw = 2u32.encode();
        assert!(matches!(
            decode_versioned::<Node>(&raw),
            Err(Error::UnknownVersion {
                kind: "node",
                version: 2
            })
        ));
    }

    #[test]
    fn test_exact_decode_rejects_trailing_bytes() {
        let mut raw = 7u32.encode();
        raw.push(0);
        assert!(matches!(
            decode_exact::<u32>("farm id", &raw),
            Err(Error::Decode { kind: "farm id", .. })
        ));
    }
}
