//! Message types for the OFT adapter contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use tunnel_common::Settlement;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token being adapted
    pub token: String,
    pub endpoint: String,
    pub admin: String,
    pub settlement: Settlement,
    /// Defaults to 6
    pub shared_decimals: Option<u8>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Take `amount` (minus dust) from `from` before a message is sent.
    /// Escrow requires an allowance; mint/burn requires a burn allowance.
    Debit {
        from: String,
        amount: Uint128,
        min_amount: Uint128,
        dst_eid: u32,
    },

    /// Give `amount` to `to` after a message arrived.
    Credit {
        to: String,
        amount: Uint128,
        src_eid: u32,
    },

    UpdateConfig {
        admin: Option<String>,
        endpoint: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(TokenResponse)]
    Token {},

    #[returns(ApprovalRequiredResponse)]
    ApprovalRequired {},

    /// Preview of a debit without moving tokens
    #[returns(DebitResponse)]
    DebitView {
        amount: Uint128,
        min_amount: Uint128,
    },

    #[returns(LedgerResponse)]
    Ledger {},

    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub endpoint: Addr,
    pub admin: Addr,
    pub settlement: Settlement,
    pub local_decimals: u8,
    pub shared_decimals: u8,
    pub decimal_conversion_rate: Uint128,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct ApprovalRequiredResponse {
    pub approval_required: bool,
}

/// Returned in the response data of `Debit` and by `DebitView`
#[cw_serde]
pub struct DebitResponse {
    pub amount_sent: Uint128,
    pub amount_received: Uint128,
}

/// Returned in the response data of `Credit`
#[cw_serde]
pub struct CreditResponse {
    pub amount_received: Uint128,
}

#[cw_serde]
pub struct LedgerResponse {
    /// Tokens held in escrow; always zero for mint/burn
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub debits: u64,
    pub credits: u64,
    pub total_debited: Uint128,
    pub total_credited: Uint128,
}
