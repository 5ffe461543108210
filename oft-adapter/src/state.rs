//! State definitions for the OFT adapter contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;
use tunnel_common::{Ledger, Settlement};

pub const CONTRACT_NAME: &str = "crates.io:oft-adapter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SHARED_DECIMALS: u8 = 6;

#[cw_serde]
pub struct Config {
    pub token: Addr,
    /// Messaging endpoint, the only caller of `Debit` and `Credit`
    pub endpoint: Addr,
    pub admin: Addr,
    pub settlement: Settlement,
    pub local_decimals: u8,
    pub shared_decimals: u8,
    /// 10^(local_decimals - shared_decimals)
    pub decimal_conversion_rate: Uint128,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub debits: u64,
    pub credits: u64,
    pub total_debited: Uint128,
    pub total_credited: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATS: Item<Stats> = Item::new("stats");

/// Escrow custody, keyed by the adapted token
pub const LEDGER: Ledger = Ledger::new("ledger");
