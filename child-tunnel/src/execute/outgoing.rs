//! Withdrawal handlers (Withdraw, WithdrawTo and the CW20 receive hook).

use cosmwasm_std::{from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;
use tunnel_common::{is_remote_address, sync_state, Settlement, SyncMessage, WithdrawMessage};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, LEDGER, MAPPINGS, STATS};

enum Funding {
    /// Pulled from the holder with an allowance
    Allowance,
    /// Already sent to the tunnel by a CW20 `Send`
    Received,
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    representative_token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&representative_token)?;
    withdraw(
        deps,
        env,
        token,
        info.sender,
        recipient,
        amount,
        Funding::Allowance,
    )
}

/// CW20 receive hook: the sending token is the withdrawn representative.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let withdrawer = deps.api.addr_validate(&cw20_msg.sender)?;

    let recipient = if cw20_msg.msg.is_empty() {
        None
    } else {
        match from_json(&cw20_msg.msg)? {
            ReceiveMsg::Withdraw { recipient } => recipient,
        }
    };
    let recipient = recipient.unwrap_or_else(|| withdrawer.to_string());

    withdraw(
        deps,
        env,
        info.sender,
        withdrawer,
        recipient,
        cw20_msg.amount,
        Funding::Received,
    )
}

fn withdraw(
    deps: DepsMut,
    env: Env,
    token: Addr,
    withdrawer: Addr,
    recipient: String,
    amount: Uint128,
    funding: Funding,
) -> Result<Response, ContractError> {
    // The recipient lives on the root chain; only its shape is checked here
    if !is_remote_address(&recipient) {
        return Err(ContractError::InvalidWithdrawalAddress);
    }

    let source_token = MAPPINGS.source_of(deps.storage, token.as_str())?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let root_tunnel = config
        .root_tunnel
        .clone()
        .ok_or(ContractError::RootTunnelNotSet)?;

    match config.settlement {
        Settlement::Escrow => LEDGER.increase(deps.storage, token.as_str(), amount)?,
        Settlement::MintBurn => LEDGER.decrease(deps.storage, token.as_str(), amount)?,
    };

    let mut stats = STATS.load(deps.storage)?;
    stats.withdrawals += 1;
    STATS.save(deps.storage, &stats)?;

    let mut messages: Vec<CosmosMsg> = match funding {
        Funding::Allowance => vec![config.settlement.pull(
            &token,
            &withdrawer,
            &env.contract.address,
            amount,
        )?],
        Funding::Received => config.settlement.settle_received(&token, amount)?,
    };

    let outbound = sync_state(
        &config.transport,
        &root_tunnel,
        &SyncMessage::Withdraw(WithdrawMessage {
            source_token: source_token.clone(),
            representative_token: token.to_string(),
            withdrawer: withdrawer.to_string(),
            recipient: recipient.clone(),
            amount,
        }),
    )?;
    let message = outbound.hex();
    messages.push(outbound.msg);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "withdraw")
        .add_attribute("source_token", source_token)
        .add_attribute("representative_token", token)
        .add_attribute("withdrawer", withdrawer)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("message", message))
}
