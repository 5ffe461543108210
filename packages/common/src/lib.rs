//! Tunnel Common - Shared Protocol Primitives for the CW20 Tunnel Contracts
//!
//! This package holds everything both tunnel endpoints and the OFT adapter
//! agree on: the sync-message codec, the token registry, the settlement
//! strategies with their ledger, and the transport call-out.

pub mod codec;
pub mod error;
pub mod message;
pub mod registry;
pub mod settlement;
pub mod transport;

#[cfg(feature = "testing")]
pub mod testing;

pub use error::TunnelError;
pub use message::{
    DepositMessage, MapTokenMessage, MappingConfirmedMessage, SyncMessage, TokenMetadata,
    WithdrawMessage,
};
pub use registry::{TokenMapping, TokenRegistry};
pub use settlement::{Ledger, Settlement};
pub use transport::{is_remote_address, sync_state, OutboundSync, TransportMsg};
