//! Child Tunnel Contract - Destination-Chain Side of the CW20 Tunnel
//!
//! Deploys one representative CW20 token per mapped source token and settles
//! deposits relayed from the root tunnel. Holders exit by withdrawing the
//! representative token, which queues a `WITHDRAW` message for the root.
//!
//! # Inbound Flow
//! 1. The transport calls `ProcessMessageFromRoot` with a state id
//! 2. `MAP_TOKEN` instantiates a `cw20-base` token; the reply registers it and
//!    confirms the mapping back to the root
//! 3. `DEPOSIT` releases or mints the representative token to the recipient
//!
//! # Outbound Flow
//! 1. Holder calls `Withdraw` / `WithdrawTo`, or sends tokens with a `Receive` hook
//! 2. Tokens are escrowed or burned depending on the settlement strategy
//! 3. A `WITHDRAW` sync message is queued on the transport

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
