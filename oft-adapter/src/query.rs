//! Query handlers for the OFT adapter contract.

use cosmwasm_std::{Deps, StdError, StdResult, Uint128};
use tunnel_common::Settlement;

use crate::execute::debit_view;
use crate::msg::{
    ApprovalRequiredResponse, ConfigResponse, DebitResponse, LedgerResponse, StatsResponse,
    TokenResponse,
};
use crate::state::{CONFIG, LEDGER, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        endpoint: config.endpoint,
        admin: config.admin,
        settlement: config.settlement,
        local_decimals: config.local_decimals,
        shared_decimals: config.shared_decimals,
        decimal_conversion_rate: config.decimal_conversion_rate,
    })
}

pub fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenResponse {
        token: config.token,
    })
}

/// Tokens are pulled from the sender, so an allowance must be granted first.
pub fn query_approval_required() -> ApprovalRequiredResponse {
    ApprovalRequiredResponse {
        approval_required: true,
    }
}

pub fn query_debit_view(
    deps: Deps,
    amount: Uint128,
    min_amount: Uint128,
) -> StdResult<DebitResponse> {
    let config = CONFIG.load(deps.storage)?;
    debit_view(&config, amount, min_amount).map_err(|err| StdError::generic_err(err.to_string()))
}

pub fn query_ledger(deps: Deps) -> StdResult<LedgerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = match config.settlement {
        Settlement::Escrow => LEDGER.balance(deps.storage, config.token.as_str())?,
        Settlement::MintBurn => Uint128::zero(),
    };
    Ok(LedgerResponse { amount })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        debits: stats.debits,
        credits: stats.credits,
        total_debited: stats.total_debited,
        total_credited: stats.total_credited,
    })
}
