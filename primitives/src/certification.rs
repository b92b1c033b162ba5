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
//! Farm and node certification kind.

use codec::{Decode, Encode, EncodeLike, Error, Input, Output};

/// Certification kind of a farm, a node or a farming policy.
///
/// On chain this is a one byte enum: `0` for [`CertificationType::Diy`] and
/// `1` for [`CertificationType::Certified`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CertificationType {
    /// Self-built hardware.
    #[default]
    Diy,
    /// Hardware certified by the grid.
    Certified,
}

impl CertificationType {
    const DIY: u8 = 0;
    const CERTIFIED: u8 = 1;

    /// Wire byte of this certification kind.
    pub fn as_byte(&self) -> u8 {
        match self {
            CertificationType::Diy => Self::DIY,
            CertificationType::Certified => Self::CERTIFIED,
        }
    }

    /// Returns `true` for [`CertificationType::Certified`].
    pub fn is_certified(&self) -> bool {
        matches!(self, CertificationType::Certified)
    }
}

impl TryFrom<u8> for CertificationType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            Self::DIY => Ok(CertificationType::Diy),
            Self::CERTIFIED => Ok(CertificationType::Certified),
            _ => Err("unknown CertificationType value".into()),
        }
    }
}

impl Encode for CertificationType {
    fn size_hint(&self) -> usize {
        1
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        dest.push_byte(self.as_byte());
    }
}

impl EncodeLike for CertificationType {}

impl Decode for CertificationType {
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        CertificationType::try_from(input.read_byte()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_encode_is_single_byte() {
        assert_eq!(CertificationType::Diy.encode(), vec![0]);
        assert_eq!(CertificationType::Certified.encode(), vec![1]);
    }

    #[test]
    fn test_round_trip() {
        for kind in [CertificationType::Diy, CertificationType::Certified] {
            let bytes = kind.encode();
            assert_eq!(CertificationType::decode(&mut &bytes[..]).unwrap(), kind);
        }
    }

    #[test]
    fn test_decode_rejects_unknown_bytes() {
        for byte in 2..=u8::MAX {
            assert!(CertificationType::decode(&mut &[byte][..]).is_err());
        }
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(CertificationType::decode(&mut &[][..]).is_err());
    }

    #[test]
    fn test_default_is_diy() {
        assert_eq!(CertificationType::default(), CertificationType::Diy);
        assert!(!CertificationType::default().is_certified());
    }
}
