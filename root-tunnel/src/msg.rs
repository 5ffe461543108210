//! Message types for the root tunnel contract

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
    /// Transport contract: outbound sync target and only caller of `ProcessMessageFromChild`
    pub transport: String,
    /// Child tunnel address if already known; otherwise set later with `SetChildTunnel`
    pub child_tunnel: Option<String>,
    pub settlement: Settlement,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Mapping
    // ========================================================================
    /// Map a CW20 token to the child chain. A no-op if already mapped.
    MapToken { token: String },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Deposit to the caller's own address on the child chain.
    /// Requires an allowance for the tunnel.
    Deposit { token: String, amount: Uint128 },

    /// Deposit to `recipient` on the child chain.
    ///
    /// `recipient` is only shape-checked here (lowercase letters and digits).
    /// The child tunnel validates it against its own chain, and a deposit it
    /// rejects cannot be delivered.
    DepositTo {
        token: String,
        recipient: String,
        amount: Uint128,
    },

    /// CW20 receive hook; `msg` is empty or a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Transport
    // ========================================================================
    /// Message relayed from the child tunnel
    ProcessMessageFromChild {
        /// Transport-assigned id, processed at most once
        exit_id: u64,
        child_message_sender: String,
        message: Binary,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    SetChildTunnel { child_tunnel: String },

    UpdateConfig {
        admin: Option<String>,
        transport: Option<String>,
    },
}

/// Hook message embedded in a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    Deposit { recipient: Option<String> },
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
    TokenMapping { token: String },

    #[returns(TokenMappingsResponse)]
    TokenMappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(LedgerResponse)]
    Ledger { token: String },

    #[returns(ExitProcessedResponse)]
    ExitProcessed { exit_id: u64 },

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
    pub child_tunnel: Option<Addr>,
    pub settlement: Settlement,
}

#[cw_serde]
pub struct TokenMappingResponse {
    /// `None` if the token was never mapped
    pub mapping: Option<TokenMapping>,
    /// True while the child has not confirmed the deployment
    pub pending: bool,
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
pub struct ExitProcessedResponse {
    pub exit_id: u64,
    pub processed: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub mapped_tokens: u64,
    pub deposits: u64,
    pub withdrawals: u64,
}
