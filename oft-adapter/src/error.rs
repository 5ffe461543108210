//! Error types for the OFT adapter contract

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

    #[error("Unauthorized: only the endpoint can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only admin can perform this action")]
    UnauthorizedAdmin,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid local decimals: token has {local}, shared decimals are {shared}")]
    InvalidLocalDecimals { local: u8, shared: u8 },

    // ========================================================================
    // Debit & Credit Errors
    // ========================================================================

    #[error("Slippage exceeded: {amount} is below the minimum {min_amount}")]
    SlippageExceeded {
        amount: Uint128,
        min_amount: Uint128,
    },

    #[error("Amount {amount} does not fit in shared decimals")]
    SharedAmountOverflow { amount: Uint128 },

    #[error("Invalid recipient")]
    InvalidRecipient,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,
}
