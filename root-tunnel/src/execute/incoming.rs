//! Messages relayed from the child tunnel.
//!
//! The transport is the only accepted caller and must vouch that the message
//! was sent by the configured child tunnel. Each exit id is processed once.

use cosmwasm_std::{Addr, Binary, DepsMut, MessageInfo, Response};
use tunnel_common::codec::bytes32_to_hex;
use tunnel_common::{MappingConfirmedMessage, SyncMessage, TunnelError, WithdrawMessage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, LEDGER, MAPPINGS, PROCESSED_EXITS, STATS};

pub fn execute_process_message_from_child(
    deps: DepsMut,
    info: MessageInfo,
    exit_id: u64,
    child_message_sender: String,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.transport {
        return Err(ContractError::InvalidSender {
            sender: info.sender.to_string(),
        });
    }

    if config.child_tunnel.as_ref().map(Addr::as_str) != Some(child_message_sender.as_str()) {
        return Err(ContractError::InvalidSenderFromChild {
            sender: child_message_sender,
        });
    }

    if PROCESSED_EXITS.has(deps.storage, exit_id) {
        return Err(ContractError::ExitAlreadyProcessed { exit_id });
    }
    PROCESSED_EXITS.save(deps.storage, exit_id, &true)?;

    let response = match SyncMessage::decode(message.as_slice())? {
        SyncMessage::Withdraw(withdraw) => process_withdraw(deps, &config, withdraw)?,
        SyncMessage::MappingConfirmed(confirmed) => process_mapping_confirmed(deps, confirmed)?,
        // Root -> child messages have no business arriving here
        other => {
            return Err(TunnelError::InvalidSyncType {
                tag: bytes32_to_hex(&other.tag()),
            }
            .into())
        }
    };

    Ok(response.add_attribute("exit_id", exit_id.to_string()))
}

fn process_withdraw(
    deps: DepsMut,
    config: &Config,
    msg: WithdrawMessage,
) -> Result<Response, ContractError> {
    let actual = MAPPINGS
        .lookup(deps.storage, &msg.source_token)?
        .and_then(|mapping| mapping.representative_token)
        .unwrap_or_default();

    // A pending mapping registers as the null address and never matches
    if actual.is_empty() || actual != msg.representative_token {
        return Err(ContractError::InvalidMappingOnExit {
            source_token: msg.source_token,
            claimed: msg.representative_token,
            actual,
        });
    }

    if msg.amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let token = deps.api.addr_validate(&msg.source_token)?;
    let recipient = deps.api.addr_validate(&msg.recipient)?;

    LEDGER.decrease(deps.storage, token.as_str(), msg.amount)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.withdrawals += 1;
    STATS.save(deps.storage, &stats)?;

    let release = config.settlement.release(&token, &recipient, msg.amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("method", "withdraw")
        .add_attribute("source_token", token)
        .add_attribute("representative_token", msg.representative_token)
        .add_attribute("withdrawer", msg.withdrawer)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", msg.amount))
}

fn process_mapping_confirmed(
    deps: DepsMut,
    msg: MappingConfirmedMessage,
) -> Result<Response, ContractError> {
    let mapping = MAPPINGS.confirm(
        deps.storage,
        &msg.source_token,
        &msg.representative_token,
    )?;

    Ok(Response::new()
        .add_attribute("method", "token_mapping")
        .add_attribute("source_token", mapping.source_token)
        .add_attribute("representative_token", msg.representative_token))
}
