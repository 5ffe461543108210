//! State definitions for the child tunnel contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use tunnel_common::{Ledger, Settlement, TokenRegistry};

pub const CONTRACT_NAME: &str = "crates.io:child-tunnel";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the representative token instantiation
pub const DEPLOY_TOKEN_REPLY_ID: u64 = 1;

/// Suffixes appended to the source token's name and symbol
pub const NAME_SUFFIX: &str = " (Polygon)";
pub const SYMBOL_SUFFIX: &str = "p";

/// `cw20-base` bounds: names of 3-50 bytes, symbols of 3-12 `[a-zA-Z-]`
pub const MAX_NAME_BYTES: usize = 50;
pub const MIN_SYMBOL_LEN: usize = 3;
pub const MAX_SYMBOL_LEN: usize = 12;
/// Pads symbols that come out shorter than `MIN_SYMBOL_LEN`
pub const SYMBOL_FILL: char = 'X';

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Relay allowed to deliver messages from the root chain
    pub transport: Addr,
    /// Peer tunnel; set once
    pub root_tunnel: Option<Addr>,
    /// `cw20-base` code instantiated for every representative token
    pub token_code_id: u64,
    pub settlement: Settlement,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub mapped_tokens: u64,
    pub deposits: u64,
    pub withdrawals: u64,
}

/// Token instantiation awaiting its reply
#[cw_serde]
pub struct PendingDeployment {
    pub source_token: String,
    /// Escrow pre-funding credited to the tunnel by the new token
    pub initial_supply: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATS: Item<Stats> = Item::new("stats");
pub const PENDING_DEPLOYMENT: Item<PendingDeployment> = Item::new("pending_deployment");

/// Source token -> representative token
pub const MAPPINGS: TokenRegistry = TokenRegistry::new("mappings", "mappings_rev");

/// Keyed by representative token.
/// Escrow: tokens in custody. Mint/burn: supply minted net of burns.
pub const LEDGER: Ledger = Ledger::new("ledger");

/// State ids already delivered by the transport
pub const PROCESSED_STATES: Map<u64, bool> = Map::new("processed_states");
