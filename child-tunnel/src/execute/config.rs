//! Peer wiring and admin configuration.

use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Set the root tunnel address. Allowed once.
pub fn execute_set_root_tunnel(
    deps: DepsMut,
    info: MessageInfo,
    root_tunnel: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    if config.root_tunnel.is_some() {
        return Err(ContractError::RootTunnelAlreadySet);
    }

    let root_tunnel = deps.api.addr_validate(&root_tunnel)?;
    config.root_tunnel = Some(root_tunnel.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_root_tunnel")
        .add_attribute("root_tunnel", root_tunnel))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
    transport: Option<String>,
    token_code_id: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(transport) = transport {
        config.transport = deps.api.addr_validate(&transport)?;
    }
    if let Some(code_id) = token_code_id {
        validate_token_code_id(deps.as_ref(), code_id)?;
        config.token_code_id = code_id;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("admin", config.admin)
        .add_attribute("transport", config.transport)
        .add_attribute("token_code_id", config.token_code_id.to_string()))
}

/// The representative token code must be stored on chain.
pub fn validate_token_code_id(deps: Deps, code_id: u64) -> Result<(), ContractError> {
    if code_id == 0 || deps.querier.query_wasm_code_info(code_id).is_err() {
        return Err(ContractError::InvalidTokenCodeId { code_id });
    }
    Ok(())
}
