//! Peer wiring and admin configuration.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Set the child tunnel address. Allowed once.
pub fn execute_set_child_tunnel(
    deps: DepsMut,
    info: MessageInfo,
    child_tunnel: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    if config.child_tunnel.is_some() {
        return Err(ContractError::ChildTunnelAlreadySet);
    }

    let child_tunnel = deps.api.addr_validate(&child_tunnel)?;
    config.child_tunnel = Some(child_tunnel.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_child_tunnel")
        .add_attribute("child_tunnel", child_tunnel))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
    transport: Option<String>,
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
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("admin", config.admin)
        .add_attribute("transport", config.transport))
}
