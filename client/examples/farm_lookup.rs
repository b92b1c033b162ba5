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
//! Example: Looking up a farm and its owner
//!
//! Loads the node list from a TOML file, connects to the first reachable
//! node and prints a farm together with the twin owning it.
//!
//! Run with: RUST_LOG=debug cargo run --example farm_lookup -- examples/tfchain.toml 1

use tfchain_client::{Config, Manager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let farm_id: u32 = args.next().map(|id| id.parse::<u32>()).transpose()?.unwrap_or(1);

    println!("Nodes: {}", config.urls.join(", "));
    let client = Manager::new(config)?.connect().await?;

    let farm = match client.farm(farm_id).await {
        Ok(farm) => farm,
        Err(e) if e.is_not_found() => {
            println!("Farm {} does not exist", farm_id);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Farm #{} \"{}\" (version {})", farm.id, farm.name, farm.version);
    println!("   Certification: {:?}", farm.certification_type);
    println!("   Pricing policy: {}", farm.pricing_policy_id);
    println!("   Dedicated: {}", farm.dedicated);
    for ip in &farm.public_ips {
        let usage = if ip.is_free() {
            "free".to_string()
        } else {
            format!("contract {}", ip.contract_id)
        };
        println!("   Public IP {} via {} ({})", ip.ip, ip.gateway, usage);
    }

    let twin = client.twin(farm.twin_id).await?;
    println!("Owner twin #{}: {}", twin.id, twin.account);
    if !twin.ip.is_empty() {
        println!("   Yggdrasil IP: {}", twin.ip);
    }

    Ok(())
}
