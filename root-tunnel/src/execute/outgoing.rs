//! Deposit handlers (Deposit, DepositTo and the CW20 receive hook).
//!
//! All three paths funnel into [`deposit`]; they differ only in who the
//! recipient is and whether the tokens still have to be pulled from the
//! depositor.

use cosmwasm_std::{from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;
use tunnel_common::{is_remote_address, sync_state, DepositMessage, Settlement, SyncMessage};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, ESCROW_SEEDS, LEDGER, MAPPINGS, STATS};

/// Where the deposited tokens come from.
enum Funding {
    /// Still in the depositor's balance; pulled with an allowance
    Allowance,
    /// Already transferred to the tunnel by a CW20 `Send`
    Received,
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;
    deposit(
        deps,
        env,
        token,
        info.sender,
        recipient,
        amount,
        Funding::Allowance,
    )
}

/// CW20 receive hook: the sending token is the deposited token.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let depositor = deps.api.addr_validate(&cw20_msg.sender)?;

    let recipient = if cw20_msg.msg.is_empty() {
        None
    } else {
        match from_json(&cw20_msg.msg)? {
            ReceiveMsg::Deposit { recipient } => recipient,
        }
    };
    let recipient = recipient.unwrap_or_else(|| depositor.to_string());

    deposit(
        deps,
        env,
        info.sender,
        depositor,
        recipient,
        cw20_msg.amount,
        Funding::Received,
    )
}

fn deposit(
    deps: DepsMut,
    env: Env,
    token: Addr,
    depositor: Addr,
    recipient: String,
    amount: Uint128,
    funding: Funding,
) -> Result<Response, ContractError> {
    // The recipient lives on the child chain; only its shape is checked here
    if !is_remote_address(&recipient) {
        return Err(ContractError::InvalidDepositAddress);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let child_tunnel = config
        .child_tunnel
        .clone()
        .ok_or(ContractError::ChildTunnelNotSet)?;

    let mapping = MAPPINGS.lookup_strict(deps.storage, token.as_str())?;
    let Some(representative) = mapping.representative_token else {
        return Err(ContractError::MappingPending {
            token: token.to_string(),
        });
    };

    if config.settlement == Settlement::Escrow {
        // The child releases from its pre-funded custody, which holds
        // seed - (ledger - seed)
        let seed = ESCROW_SEEDS
            .may_load(deps.storage, token.as_str())?
            .unwrap_or_default();
        let ledger = LEDGER.balance(deps.storage, token.as_str())?;
        let available = seed.saturating_add(seed).saturating_sub(ledger);
        if amount > available {
            return Err(ContractError::InsufficientChildCustody {
                token: token.to_string(),
                available,
                requested: amount,
            });
        }
    }

    // Accounting first; token messages run after the handler returns
    LEDGER.increase(deps.storage, token.as_str(), amount)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.deposits += 1;
    STATS.save(deps.storage, &stats)?;

    let mut messages: Vec<CosmosMsg> = match funding {
        Funding::Allowance => vec![config.settlement.pull(
            &token,
            &depositor,
            &env.contract.address,
            amount,
        )?],
        Funding::Received => config.settlement.settle_received(&token, amount)?,
    };

    let outbound = sync_state(
        &config.transport,
        &child_tunnel,
        &SyncMessage::Deposit(DepositMessage {
            source_token: token.to_string(),
            depositor: depositor.to_string(),
            recipient: recipient.clone(),
            amount,
        }),
    )?;
    let message = outbound.hex();
    messages.push(outbound.msg);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "deposit")
        .add_attribute("source_token", token)
        .add_attribute("representative_token", representative)
        .add_attribute("depositor", depositor)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("message", message))
}
