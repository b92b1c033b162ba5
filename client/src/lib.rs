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
//! # tfchain-client - ThreeFold Grid Chain Client
//!
//! `tfchain-client` reads the state of the ThreeFold grid chain: entities,
//! farms, nodes, twins, pricing and farming policies, contracts and the
//! Stellar bridge bookkeeping. It also decodes the events a block emitted.
//!
//! ## Features
//!
//! - **Storage Access**: Typed accessors deriving Substrate storage keys
//! - **Versioned Records**: Records decoded according to their stored version
//! - **Event Catalog**: Block events decoded into a closed [`events::Event`] type
//! - **Pinned Reads**: Any query at the latest block or at a fixed block hash
//!
//! ## Quick Start
//!
//! ```no_run
//! use tfchain_client::{Config, Manager};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let manager = Manager::new(Config::default())?;
//!     let client = manager.connect().await?;
//!
//!     let farm = client.farm(1).await?;
//!     println!("farm {} owned by twin {}", farm.name, farm.twin_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: The [`Client`] and its storage accessors
//! - [`backend`]: Transport seam and the subxt based [`RpcBackend`]
//! - [`versioned`]: Version dispatch of stored records
//! - [`events`]: Event catalog and decoded event records
//! - [`storage`]: Storage key derivation
//! - [`config`] and [`manager`]: Node configuration and connection
//!
//! ## Errors
//!
//! Every accessor returns [`Result`]. A value missing from storage is
//! [`Error::NotFound`], never a default value:
//!
//! ```no_run
//! # use tfchain_client::{Client, RpcBackend};
//! # async fn example(client: Client<RpcBackend>) -> tfchain_client::Result<()> {
//! match client.node(42).await {
//!     Ok(node) => println!("node 42 is in farm {}", node.farm_id),
//!     Err(e) if e.is_not_found() => println!("no node 42"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod manager;
pub mod storage;
pub mod versioned;

mod bridge;
mod contract;
mod tfgrid;

#[cfg(test)]
mod mock;

pub use backend::{Backend, RawEvent, RpcBackend};
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use manager::Manager;

pub use tfchain_primitives as primitives;
