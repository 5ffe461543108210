//! Call-out side of the state-sync transport.
//!
//! Tunnels hand encoded sync messages to a transport contract; delivery to the
//! paired tunnel happens off-chain and comes back in through the tunnel's
//! `ProcessMessageFrom*` entry point.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, WasmMsg};

use crate::message::SyncMessage;

/// Execute message understood by a transport contract.
#[cw_serde]
pub enum TransportMsg {
    /// Queue `data` for delivery to `receiver` on the paired chain
    SyncState { receiver: String, data: Binary },
}

/// Encoded message together with the transport call carrying it.
pub struct OutboundSync {
    pub data: Vec<u8>,
    pub msg: CosmosMsg,
}

impl OutboundSync {
    /// `0x` hex of the payload, for the `message` attribute.
    pub fn hex(&self) -> String {
        format!("0x{}", hex::encode(&self.data))
    }
}

/// Build the transport call that sends `message` to `receiver`.
pub fn sync_state(
    transport: &Addr,
    receiver: &Addr,
    message: &SyncMessage,
) -> StdResult<OutboundSync> {
    let data = message.encode();
    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: transport.to_string(),
        msg: to_json_binary(&TransportMsg::SyncState {
            receiver: receiver.to_string(),
            data: Binary::from(data.clone()),
        })?,
        funds: vec![],
    });
    Ok(OutboundSync { data, msg })
}

/// Shape check for an address on the paired chain, done before anything is
/// sent. The paired chain's prefix is unknown here, so only the bech32
/// alphabet is enforced.
pub fn is_remote_address(address: &str) -> bool {
    address.len() >= 3
        && address
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MappingConfirmedMessage;
    use cosmwasm_std::from_json;

    #[test]
    fn test_sync_state_wraps_encoded_message() {
        let message = SyncMessage::MappingConfirmed(MappingConfirmedMessage {
            source_token: "root_token".to_string(),
            representative_token: "child_token".to_string(),
        });
        let out = sync_state(
            &Addr::unchecked("transport"),
            &Addr::unchecked("root_tunnel"),
            &message,
        )
        .unwrap();

        assert!(out.hex().starts_with("0x"));
        let CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr, msg, ..
        }) = out.msg
        else {
            panic!("expected wasm execute");
        };
        assert_eq!(contract_addr, "transport");
        let TransportMsg::SyncState { receiver, data } = from_json(msg).unwrap();
        assert_eq!(receiver, "root_tunnel");
        assert_eq!(SyncMessage::decode(data.as_slice()).unwrap(), message);
    }

    #[test]
    fn test_is_remote_address() {
        assert!(is_remote_address("terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v"));
        assert!(is_remote_address("contract0"));
        assert!(!is_remote_address(""));
        assert!(!is_remote_address("ab"));
        assert!(!is_remote_address("Terra1Mixed"));
        assert!(!is_remote_address("not an address"));
        assert!(!is_remote_address("0xdeadbeef!"));
    }
}
