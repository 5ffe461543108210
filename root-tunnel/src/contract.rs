//! Root Tunnel Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_map_token, execute_process_message_from_child, execute_receive,
    execute_set_child_tunnel, execute_update_config,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_exit_processed, query_ledger, query_stats, query_token_mapping,
    query_token_mappings,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        child_tunnel: msg
            .child_tunnel
            .map(|child| deps.api.addr_validate(&child))
            .transpose()?,
        settlement: msg.settlement,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("transport", config.transport)
        .add_attribute(
            "child_tunnel",
            config
                .child_tunnel
                .map(String::from)
                .unwrap_or_default(),
        )
        .add_attribute("settlement", config.settlement.as_str()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Mapping
        ExecuteMsg::MapToken { token } => execute_map_token(deps, env, token),

        // Deposits
        ExecuteMsg::Deposit { token, amount } => {
            let recipient = info.sender.to_string();
            execute_deposit(deps, env, info, token, recipient, amount)
        }
        ExecuteMsg::DepositTo {
            token,
            recipient,
            amount,
        } => execute_deposit(deps, env, info, token, recipient, amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Transport
        ExecuteMsg::ProcessMessageFromChild {
            exit_id,
            child_message_sender,
            message,
        } => execute_process_message_from_child(deps, info, exit_id, child_message_sender, message),

        // Admin
        ExecuteMsg::SetChildTunnel { child_tunnel } => {
            execute_set_child_tunnel(deps, info, child_tunnel)
        }
        ExecuteMsg::UpdateConfig { admin, transport } => {
            execute_update_config(deps, info, admin, transport)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenMapping { token } => to_json_binary(&query_token_mapping(deps, token)?),
        QueryMsg::TokenMappings { start_after, limit } => {
            to_json_binary(&query_token_mappings(deps, start_after, limit)?)
        }
        QueryMsg::Ledger { token } => to_json_binary(&query_ledger(deps, token)?),
        QueryMsg::ExitProcessed { exit_id } => {
            to_json_binary(&query_exit_processed(deps, exit_id)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
