//! Error types for the root tunnel contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;
use tunnel_common::TunnelError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Tunnel(#[from] TunnelError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Invalid sender: {sender} is not the transport")]
    InvalidSender { sender: String },

    #[error("Invalid sender from child: {sender}")]
    InvalidSenderFromChild { sender: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Child tunnel already set")]
    ChildTunnelAlreadySet,

    #[error("Child tunnel not set")]
    ChildTunnelNotSet,

    #[error("Unsupported decimals: {decimals} (max {max})")]
    UnsupportedDecimals { decimals: u8, max: u8 },

    // ========================================================================
    // Deposit & Exit Errors
    // ========================================================================

    #[error("Invalid deposit address")]
    InvalidDepositAddress,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Mapping not confirmed by the child tunnel: {token}")]
    MappingPending { token: String },

    #[error("Insufficient child custody for {token}: available {available}, requested {requested}")]
    InsufficientChildCustody {
        token: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Exit already processed: {exit_id}")]
    ExitAlreadyProcessed { exit_id: u64 },

    #[error("Invalid mapping on exit: {source_token} claimed {claimed}, registered {actual}")]
    InvalidMappingOnExit {
        source_token: String,
        claimed: String,
        actual: String,
    },
}
