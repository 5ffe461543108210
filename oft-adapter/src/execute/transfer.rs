//! Debit and credit handlers.

use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, Uint128};
use tunnel_common::Settlement;

use crate::conversion::{remove_dust, to_shared};
use crate::error::ContractError;
use crate::msg::{CreditResponse, DebitResponse};
use crate::state::{Config, CONFIG, LEDGER, STATS};

/// Amounts a debit of `amount` would move.
pub fn debit_view(
    config: &Config,
    amount: Uint128,
    min_amount: Uint128,
) -> Result<DebitResponse, ContractError> {
    let amount_sent = remove_dust(amount, config.decimal_conversion_rate);
    to_shared(amount_sent, config.decimal_conversion_rate)?;

    // No fee: what is sent is what arrives
    let amount_received = amount_sent;
    if amount_received < min_amount {
        return Err(ContractError::SlippageExceeded {
            amount: amount_received,
            min_amount,
        });
    }

    Ok(DebitResponse {
        amount_sent,
        amount_received,
    })
}

pub fn execute_debit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    amount: Uint128,
    min_amount: Uint128,
    dst_eid: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::Unauthorized);
    }
    let from = deps.api.addr_validate(&from)?;

    let debit = debit_view(&config, amount, min_amount)?;
    if debit.amount_sent.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    if config.settlement == Settlement::Escrow {
        LEDGER.increase(deps.storage, config.token.as_str(), debit.amount_sent)?;
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.debits += 1;
    stats.total_debited += debit.amount_sent;
    STATS.save(deps.storage, &stats)?;

    let pull = config.settlement.pull(
        &config.token,
        &from,
        &env.contract.address,
        debit.amount_sent,
    )?;

    Ok(Response::new()
        .add_message(pull)
        .set_data(to_json_binary(&debit)?)
        .add_attribute("method", "debit")
        .add_attribute("from", from)
        .add_attribute("amount_sent", debit.amount_sent)
        .add_attribute("amount_received", debit.amount_received)
        .add_attribute("dst_eid", dst_eid.to_string()))
}

pub fn execute_credit(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
    src_eid: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::Unauthorized);
    }
    if to.is_empty() {
        return Err(ContractError::InvalidRecipient);
    }
    let to = deps.api.addr_validate(&to)?;

    let credit = CreditResponse {
        amount_received: amount,
    };
    let mut response = Response::new()
        .set_data(to_json_binary(&credit)?)
        .add_attribute("method", "credit")
        .add_attribute("to", &to)
        .add_attribute("amount_received", amount)
        .add_attribute("src_eid", src_eid.to_string());

    // Zero-value messages still complete; CW20 rejects zero transfers
    if amount.is_zero() {
        return Ok(response);
    }

    if config.settlement == Settlement::Escrow {
        LEDGER.decrease(deps.storage, config.token.as_str(), amount)?;
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.credits += 1;
    stats.total_credited += amount;
    STATS.save(deps.storage, &stats)?;

    response = response.add_message(config.settlement.release(&config.token, &to, amount)?);
    Ok(response)
}
