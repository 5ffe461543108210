//! OFT Adapter Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::conversion::conversion_rate;
use crate::error::ContractError;
use crate::execute::{execute_credit, execute_debit, execute_update_config};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_approval_required, query_config, query_debit_view, query_ledger, query_stats,
    query_token,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_SHARED_DECIMALS, STATS,
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

    let token = deps.api.addr_validate(&msg.token)?;
    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(&token, &Cw20QueryMsg::TokenInfo {})?;

    let shared_decimals = msg.shared_decimals.unwrap_or(DEFAULT_SHARED_DECIMALS);
    let decimal_conversion_rate = conversion_rate(token_info.decimals, shared_decimals)?;

    let config = Config {
        token,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        admin: deps.api.addr_validate(&msg.admin)?,
        settlement: msg.settlement,
        local_decimals: token_info.decimals,
        shared_decimals,
        decimal_conversion_rate,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", config.token)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute("settlement", config.settlement.as_str())
        .add_attribute("decimal_conversion_rate", decimal_conversion_rate))
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
        ExecuteMsg::Debit {
            from,
            amount,
            min_amount,
            dst_eid,
        } => execute_debit(deps, env, info, from, amount, min_amount, dst_eid),
        ExecuteMsg::Credit {
            to,
            amount,
            src_eid,
        } => execute_credit(deps, info, to, amount, src_eid),
        ExecuteMsg::UpdateConfig { admin, endpoint } => {
            execute_update_config(deps, info, admin, endpoint)
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
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::ApprovalRequired {} => to_json_binary(&query_approval_required()),
        QueryMsg::DebitView { amount, min_amount } => {
            to_json_binary(&query_debit_view(deps, amount, min_amount)?)
        }
        QueryMsg::Ledger {} => to_json_binary(&query_ledger(deps)?),
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
