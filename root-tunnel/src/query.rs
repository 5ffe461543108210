//! Query handlers for the root tunnel contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ConfigResponse, ExitProcessedResponse, LedgerResponse, StatsResponse, TokenMappingResponse,
    TokenMappingsResponse,
};
use crate::state::{CONFIG, LEDGER, MAPPINGS, PROCESSED_EXITS, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        transport: config.transport,
        child_tunnel: config.child_tunnel,
        settlement: config.settlement,
    })
}

pub fn query_token_mapping(deps: Deps, token: String) -> StdResult<TokenMappingResponse> {
    let mapping = MAPPINGS.lookup(deps.storage, &token)?;
    let pending = mapping
        .as_ref()
        .map_or(false, |m| m.representative_token.is_none());
    Ok(TokenMappingResponse { mapping, pending })
}

pub fn query_token_mappings(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokenMappingsResponse> {
    let mappings = MAPPINGS.range(deps.storage, start_after.as_deref(), limit)?;
    Ok(TokenMappingsResponse { mappings })
}

pub fn query_ledger(deps: Deps, token: String) -> StdResult<LedgerResponse> {
    let amount = LEDGER.balance(deps.storage, &token)?;
    Ok(LedgerResponse { token, amount })
}

pub fn query_exit_processed(deps: Deps, exit_id: u64) -> StdResult<ExitProcessedResponse> {
    Ok(ExitProcessedResponse {
        exit_id,
        processed: PROCESSED_EXITS.has(deps.storage, exit_id),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        mapped_tokens: stats.mapped_tokens,
        deposits: stats.deposits,
        withdrawals: stats.withdrawals,
    })
}
