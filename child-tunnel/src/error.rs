//! Error types for the child tunnel contract

use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;
use tunnel_common::TunnelError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Tunnel(#[from] TunnelError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Invalid sender: {sender} is not the transport")]
    InvalidSender { sender: String },

    #[error("Invalid sender from root: {sender}")]
    InvalidSenderFromRoot { sender: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Root tunnel already set")]
    RootTunnelAlreadySet,

    #[error("Root tunnel not set")]
    RootTunnelNotSet,

    #[error("Invalid token code id: {code_id}")]
    InvalidTokenCodeId { code_id: u64 },

    // ========================================================================
    // Deployment Errors
    // ========================================================================

    #[error("No token deployment in progress")]
    NoPendingDeployment,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    // ========================================================================
    // Deposit & Withdrawal Errors
    // ========================================================================

    #[error("Invalid withdrawal address")]
    InvalidWithdrawalAddress,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("State already processed: {state_id}")]
    StateAlreadyProcessed { state_id: u64 },
}
