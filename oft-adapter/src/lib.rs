//! OFT Adapter Contract - Debit/Credit Accounting for an Existing CW20 Token
//!
//! A generic cross-chain messaging endpoint drives this contract: it debits
//! the sender before a message leaves and credits the recipient when one
//! arrives. The token is fixed at instantiation; there is no mapping phase.
//!
//! Amounts travel between chains in "shared decimals". Anything below the
//! shared precision is dust and is never debited.

pub mod contract;
pub mod conversion;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
