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
//! Client errors.

use thiserror::Error;

/// Boxed error returned by a [`Backend`](crate::backend::Backend).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a client operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while querying the chain.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage holds no value under the derived key.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Stored value carries a version this client can't decode.
    #[error("unknown {kind} version {version}")]
    UnknownVersion {
        /// Record kind.
        kind: &'static str,
        /// Version read from the payload.
        version: u32,
    },

    /// Query arguments could not be built.
    #[error("encoding error building query arguments: {0}")]
    Encoding(String),

    /// RPC call failed.
    #[error("failed to lookup {context}: {source}")]
    Transport {
        /// What was being looked up.
        context: &'static str,
        /// Transport failure.
        #[source]
        source: BoxError,
    },

    /// Stored value is malformed.
    #[error("failed to load {kind}: {source}")]
    Decode {
        /// Record kind.
        kind: &'static str,
        /// Codec failure.
        #[source]
        source: parity_scale_codec::Error,
    },

    /// Node endpoint refused the connection.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        /// Endpoint URL.
        url: String,
        /// Connection failure.
        #[source]
        source: BoxError,
    },

    /// Configuration is invalid or unreadable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the queried value does not exist on chain.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns `true` if the queried value has an unsupported version.
    pub fn is_unknown_version(&self) -> bool {
        matches!(self, Error::UnknownVersion { .. })
    }

    pub(crate) fn transport(context: &'static str) -> impl FnOnce(BoxError) -> Self {
        move |source| Error::Transport { context, source }
    }

    pub(crate) fn decode(kind: &'static str) -> impl FnOnce(parity_scale_codec::Error) -> Self {
        move |source| Error::Decode { kind, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(Error::NotFound("farm").to_string(), "farm not found");
        assert_eq!(
            Error::UnknownVersion {
                kind: "twin",
                version: 9
            }
            .to_string(),
            "unknown twin version 9"
        );

        let err = Error::transport("farm")("connection reset".into());
        assert_eq!(
            err.to_string(),
            "failed to lookup farm: connection reset"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::NotFound("node").is_not_found());
        assert!(!Error::Encoding("empty name".into()).is_not_found());
        assert!(Error::UnknownVersion {
            kind: "node",
            version: 0
        }
        .is_unknown_version());
    }
}
