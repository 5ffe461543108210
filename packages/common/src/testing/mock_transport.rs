//! In-memory stand-in for the state-sync transport.
//!
//! Every `SyncState` call is stored with a monotonically increasing id. Tests
//! read the queue and deliver each message to the paired tunnel, using the id
//! as the state id or exit id.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw_storage_plus::{Bound, Item, Map};

use crate::transport::TransportMsg;

const NEXT_ID: Item<u64> = Item::new("next_id");
const MESSAGES: Map<u64, OutboundMessage> = Map::new("messages");

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct OutboundMessage {
    pub id: u64,
    /// Tunnel that queued the message
    pub sender: String,
    pub receiver: String,
    pub data: Binary,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TransportQueryMsg {
    #[returns(Vec<OutboundMessage>)]
    Messages { start_after: Option<u64> },
    #[returns(OutboundMessage)]
    Message { id: u64 },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    NEXT_ID.save(deps.storage, &1)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: TransportMsg,
) -> StdResult<Response> {
    match msg {
        TransportMsg::SyncState { receiver, data } => {
            let id = NEXT_ID.load(deps.storage)?;
            NEXT_ID.save(deps.storage, &(id + 1))?;
            MESSAGES.save(
                deps.storage,
                id,
                &OutboundMessage {
                    id,
                    sender: info.sender.to_string(),
                    receiver: receiver.clone(),
                    data,
                },
            )?;

            Ok(Response::new()
                .add_attribute("method", "sync_state")
                .add_attribute("id", id.to_string())
                .add_attribute("sender", info.sender)
                .add_attribute("receiver", receiver))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: TransportQueryMsg) -> StdResult<Binary> {
    match msg {
        TransportQueryMsg::Messages { start_after } => {
            let start = start_after.map(Bound::exclusive);
            let messages = MESSAGES
                .range(deps.storage, start, None, Order::Ascending)
                .map(|item| item.map(|(_, message)| message))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&messages)
        }
        TransportQueryMsg::Message { id } => to_json_binary(&MESSAGES.load(deps.storage, id)?),
    }
}
