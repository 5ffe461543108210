//! State definitions for the root tunnel contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use tunnel_common::{Ledger, Settlement, TokenRegistry};

pub const CONTRACT_NAME: &str = "crates.io:root-tunnel";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Relay allowed to deliver messages from the child chain
    pub transport: Addr,
    /// Peer tunnel; set once, outbound flows fail until then
    pub child_tunnel: Option<Addr>,
    pub settlement: Settlement,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub mapped_tokens: u64,
    pub deposits: u64,
    pub withdrawals: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATS: Item<Stats> = Item::new("stats");

/// Source token -> representative token (pending until the child confirms)
pub const MAPPINGS: TokenRegistry = TokenRegistry::new("mappings", "mappings_rev");

/// Escrow: source tokens in custody. Mint/burn: source tokens burned net of re-mints.
pub const LEDGER: Ledger = Ledger::new("ledger");

/// Escrow: tunnel balance at `MapToken`, which the child pre-funds its
/// custody with. Bounds how much can be bridged out.
pub const ESCROW_SEEDS: Map<&str, Uint128> = Map::new("escrow_seeds");

/// Largest `decimals` a `cw20-base` representative token accepts
pub const MAX_DECIMALS: u8 = 18;

/// Exit ids already delivered by the transport
pub const PROCESSED_EXITS: Map<u64, bool> = Map::new("processed_exits");
