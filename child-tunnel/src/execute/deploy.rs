//! Completion of a representative token deployment.

use cosmwasm_std::{DepsMut, Reply, Response};
use cw_utils::parse_reply_instantiate_data;
use tunnel_common::{sync_state, MappingConfirmedMessage, SyncMessage};

use crate::error::ContractError;
use crate::state::{CONFIG, LEDGER, MAPPINGS, PENDING_DEPLOYMENT, STATS};

/// Register the new token, seed the escrow ledger and confirm the mapping to
/// the root tunnel.
pub fn reply_deploy_token(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let instantiated = parse_reply_instantiate_data(msg)?;
    let representative = deps.api.addr_validate(&instantiated.contract_address)?;

    let pending = PENDING_DEPLOYMENT
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingDeployment)?;
    PENDING_DEPLOYMENT.remove(deps.storage);

    let config = CONFIG.load(deps.storage)?;
    let root_tunnel = config
        .root_tunnel
        .clone()
        .ok_or(ContractError::RootTunnelNotSet)?;

    MAPPINGS.register(
        deps.storage,
        &pending.source_token,
        Some(representative.as_str()),
    )?;
    LEDGER.increase(deps.storage, representative.as_str(), pending.initial_supply)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.mapped_tokens += 1;
    STATS.save(deps.storage, &stats)?;

    let outbound = sync_state(
        &config.transport,
        &root_tunnel,
        &SyncMessage::MappingConfirmed(MappingConfirmedMessage {
            source_token: pending.source_token.clone(),
            representative_token: representative.to_string(),
        }),
    )?;
    let message = outbound.hex();

    Ok(Response::new()
        .add_message(outbound.msg)
        .add_attribute("method", "token_mapping")
        .add_attribute("source_token", pending.source_token)
        .add_attribute("representative_token", representative)
        .add_attribute("message", message))
}
