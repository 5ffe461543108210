//! Contract wrappers and helpers shared by the integration suites.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use super::mock_transport::{self, OutboundMessage, TransportQueryMsg};
use crate::message::SyncMessage;

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn contract_transport() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_transport::execute,
        mock_transport::instantiate,
        mock_transport::query,
    );
    Box::new(contract)
}

/// Store and instantiate a mock transport.
pub fn instantiate_transport(app: &mut App, owner: &Addr) -> Addr {
    let code_id = app.store_code(contract_transport());
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &mock_transport::InstantiateMsg {},
        &[],
        "transport",
        None,
    )
    .unwrap()
}

/// Messages queued on `transport` after `start_after`, oldest first.
pub fn sent_messages(app: &App, transport: &Addr, start_after: Option<u64>) -> Vec<OutboundMessage> {
    app.wrap()
        .query_wasm_smart(transport, &TransportQueryMsg::Messages { start_after })
        .unwrap()
}

/// Last message queued on `transport`, decoded.
pub fn last_sync_message(app: &App, transport: &Addr) -> (OutboundMessage, SyncMessage) {
    let message = sent_messages(app, transport, None)
        .pop()
        .expect("no message was sent");
    let decoded = SyncMessage::decode(message.data.as_slice()).unwrap();
    (message, decoded)
}

pub fn cw20_balance(app: &App, token: &Addr, address: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn cw20_supply(app: &App, token: &Addr) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

/// Value of the first attribute named `key` across all events.
pub fn find_attribute(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

/// Whether any event carries `method = value`.
pub fn has_method(res: &AppResponse, value: &str) -> bool {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .any(|a| a.key == "method" && a.value == value)
}
