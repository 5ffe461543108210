//! Test harness for `cw-multi-test` suites.
//!
//! ## Submodules
//!
//! - `mock_transport` - contract that records outbound sync messages in FIFO
//!   order so tests can relay them by hand
//! - `contracts` - boxed contract wrappers and small query/attribute helpers

pub mod contracts;
pub mod mock_transport;

pub use contracts::*;
pub use mock_transport::{OutboundMessage, TransportQueryMsg};
