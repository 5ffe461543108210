//! Execute handlers for the root tunnel contract.
//!
//! - `map_token` - first-time mapping of a source token
//! - `outgoing` - Deposit, DepositTo and the CW20 receive hook
//! - `incoming` - messages relayed from the child tunnel
//! - `config` - child tunnel wiring and admin updates

mod config;
mod incoming;
mod map_token;
mod outgoing;

pub use config::*;
pub use incoming::*;
pub use map_token::*;
pub use outgoing::*;
