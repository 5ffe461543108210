//! Message types for the child tunnel contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;
use tunnel_common::{Settlement, TokenMapping};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Transport contract: outbound sync target and only caller of `ProcessMessageFromRoot`
    pub transport: String,
    /// Root tunnel address if already known; otherwise set later with `SetRootTunnel`
    pub root_tunnel: Option<String>,
    /// Stored `cw20-base` code used for representative tokens
    pub token_code_id: u64,
    pub settlement: Settlement,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transport
    // ========================================================================
    /// Message relayed from the root tunnel
    ProcessMessageFromRoot {
        /// Transport-assigned id, processed at most once
        state_id: u64,
        root_message_sender: String,
        message: Binary,
    },

    // ========================================================================
    // Withdrawals
    // ========================================================================
    /// Withdraw to the caller's own address on the root chain.
    /// Requires an allowance for the tunnel.
    Withdraw {
        representative_token: String,
        amount: Uint128,
    },

    /// Withdraw to `recipient` on the root chain. Only the shape of
    /// `recipient` is checked here; the root tunnel validates it.
    WithdrawTo {
        representative_token: String,
        recipient: String,
        amount: Uint128,
    },

    /// CW20 receive hook; `msg` is empty or a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Admin
    // ========================================================================
    SetRootTunnel { root_tunnel: String },

    UpdateConfig {
        admin: Option<String>,
        transport: Option<String>,
        token_code_id: Option<u64>,
    },
}

/// Hook message embedded in a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    Withdraw { recipient: Option<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(TokenMappingResponse)]
    TokenMapping { source_token: String },

    #[returns(SourceTokenResponse)]
    SourceToken { representative_token: String },

    #[returns(TokenMappingsResponse)]
    TokenMappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Ledger of a representative token
    #[returns(LedgerResponse)]
    Ledger { token: String },

    #[returns(StateProcessedResponse)]
    StateProcessed { state_id: u64 },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub transport: Addr,
    pub root_tunnel: Option<Addr>,
    pub token_code_id: u64,
    pub settlement: Settlement,
}

#[cw_serde]
pub struct TokenMappingResponse {
    pub mapping: Option<TokenMapping>,
}

#[cw_serde]
pub struct SourceTokenResponse {
    /// `None` if the token is not a representative of this tunnel
    pub source_token: Option<String>,
}

#[cw_serde]
pub struct TokenMappingsResponse {
    pub mappings: Vec<TokenMapping>,
}

#[cw_serde]
pub struct LedgerResponse {
    pub token: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct StateProcessedResponse {
    pub state_id: u64,
    pub processed: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub mapped_tokens: u64,
    pub deposits: u64,
    pub withdrawals: u64,
}
