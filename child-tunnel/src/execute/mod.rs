//! Execute handlers for the child tunnel contract.
//!
//! - `incoming` - messages relayed from the root tunnel
//! - `deploy` - reply of the representative token instantiation
//! - `outgoing` - Withdraw, WithdrawTo and the CW20 receive hook
//! - `config` - root tunnel wiring and admin updates

mod config;
mod deploy;
mod incoming;
mod outgoing;

pub use config::*;
pub use deploy::*;
pub use incoming::*;
pub use outgoing::*;
