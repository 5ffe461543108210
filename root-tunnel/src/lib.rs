//! Root Tunnel Contract - Source-Chain Side of the CW20 Tunnel
//!
//! Holds the canonical token. Users deposit here and receive the
//! representative token on the child chain; exits sent back by the child tunnel
//! release or re-mint the source token.
//!
//! # Mapping Flow
//! 1. Anyone calls `MapToken` for a CW20 token
//! 2. The tunnel records a pending mapping and sends `MAP_TOKEN` to the child
//! 3. The child deploys the representative token and answers with
//!    `MAPPING_CONFIRMED`, which fills in the representative address
//!
//! # Deposit Flow
//! 1. User calls `Deposit` / `DepositTo`, or sends tokens with a `Receive` hook
//! 2. Tokens are escrowed or burned depending on the settlement strategy
//! 3. A `DEPOSIT` sync message is queued on the transport
//!
//! # Exit Flow
//! 1. The transport relays a `WITHDRAW` message via `ProcessMessageFromChild`
//! 2. The claimed mapping is checked against the registry
//! 3. Tokens are released from custody or minted to the recipient

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
