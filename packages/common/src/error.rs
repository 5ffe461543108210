//! Protocol faults shared by both tunnel endpoints and the OFT adapter.
//!
//! Contract-specific errors wrap [`TunnelError`] transparently so the message
//! surfaced to the caller is the one defined here.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TunnelError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Protocol Faults
    // ========================================================================

    #[error("Malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("Invalid sync type: {tag}")]
    InvalidSyncType { tag: String },

    // ========================================================================
    // Registry Faults
    // ========================================================================

    #[error("Token already mapped: {source_token} -> {representative_token}")]
    TokenAlreadyMapped {
        source_token: String,
        representative_token: String,
    },

    #[error("Token not mapped: {token}")]
    TokenNotMapped { token: String },

    // ========================================================================
    // Ledger Faults
    // ========================================================================

    #[error("Insufficient ledger balance for {token}: available {available}, requested {requested}")]
    InsufficientLedger {
        token: String,
        available: Uint128,
        requested: Uint128,
    },
}

impl TunnelError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        TunnelError::MalformedMessage {
            reason: reason.into(),
        }
    }
}
