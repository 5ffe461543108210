//! Child Tunnel Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and the deploy reply
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_process_message_from_root, execute_receive, execute_set_root_tunnel,
    execute_update_config, execute_withdraw, reply_deploy_token, validate_token_code_id,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_ledger, query_source_token, query_state_processed, query_stats,
    query_token_mapping, query_token_mappings,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPLOY_TOKEN_REPLY_ID, STATS,
};

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

    validate_token_code_id(deps.as_ref(), msg.token_code_id)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        root_tunnel: msg
            .root_tunnel
            .map(|root| deps.api.addr_validate(&root))
            .transpose()?,
        token_code_id: msg.token_code_id,
        settlement: msg.settlement,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("transport", config.transport)
        .add_attribute(
            "root_tunnel",
            config.root_tunnel.map(String::from).unwrap_or_default(),
        )
        .add_attribute("token_code_id", config.token_code_id.to_string())
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
        // Transport
        ExecuteMsg::ProcessMessageFromRoot {
            state_id,
            root_message_sender,
            message,
        } => execute_process_message_from_root(
            deps,
            env,
            info,
            state_id,
            root_message_sender,
            message,
        ),

        // Withdrawals
        ExecuteMsg::Withdraw {
            representative_token,
            amount,
        } => {
            let recipient = info.sender.to_string();
            execute_withdraw(deps, env, info, representative_token, recipient, amount)
        }
        ExecuteMsg::WithdrawTo {
            representative_token,
            recipient,
            amount,
        } => execute_withdraw(deps, env, info, representative_token, recipient, amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Admin
        ExecuteMsg::SetRootTunnel { root_tunnel } => {
            execute_set_root_tunnel(deps, info, root_tunnel)
        }
        ExecuteMsg::UpdateConfig {
            admin,
            transport,
            token_code_id,
        } => execute_update_config(deps, info, admin, transport, token_code_id),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        DEPLOY_TOKEN_REPLY_ID => reply_deploy_token(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenMapping { source_token } => {
            to_json_binary(&query_token_mapping(deps, source_token)?)
        }
        QueryMsg::SourceToken {
            representative_token,
        } => to_json_binary(&query_source_token(deps, representative_token)?),
        QueryMsg::TokenMappings { start_after, limit } => {
            to_json_binary(&query_token_mappings(deps, start_after, limit)?)
        }
        QueryMsg::Ledger { token } => to_json_binary(&query_ledger(deps, token)?),
        QueryMsg::StateProcessed { state_id } => {
            to_json_binary(&query_state_processed(deps, state_id)?)
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
