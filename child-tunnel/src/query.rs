//! Query handlers for the child tunnel contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ConfigResponse, LedgerResponse, SourceTokenResponse, StateProcessedResponse, StatsResponse,
    TokenMappingResponse, TokenMappingsResponse,
};
use crate::state::{CONFIG, LEDGER, MAPPINGS, PROCESSED_STATES, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        transport: config.transport,
        root_tunnel: config.root_tunnel,
        token_code_id: config.token_code_id,
        settlement: config.settlement,
    })
}

pub fn query_token_mapping(deps: Deps, source_token: String) -> StdResult<TokenMappingResponse> {
    Ok(TokenMappingResponse {
        mapping: MAPPINGS.lookup(deps.storage, &source_token)?,
    })
}

pub fn query_source_token(
    deps: Deps,
    representative_token: String,
) -> StdResult<SourceTokenResponse> {
    Ok(SourceTokenResponse {
        source_token: MAPPINGS.source_of(deps.storage, &representative_token).ok(),
    })
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

pub fn query_state_processed(deps: Deps, state_id: u64) -> StdResult<StateProcessedResponse> {
    Ok(StateProcessedResponse {
        state_id,
        processed: PROCESSED_STATES.has(deps.storage, state_id),
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
