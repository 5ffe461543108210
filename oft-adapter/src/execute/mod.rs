//! Execute handlers for the OFT adapter contract.

mod admin;
mod transfer;

pub use admin::*;
pub use transfer::*;
