//! `MapToken` handler.
//!
//! Reads the token's metadata from the chain and ships it to the child tunnel,
//! which deploys the representative token.

use cosmwasm_std::{DepsMut, Env, Response, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, LogoInfo, MarketingInfoResponse, TokenInfoResponse};
use tunnel_common::{sync_state, MapTokenMessage, Settlement, SyncMessage, TokenMetadata};

use crate::error::ContractError;
use crate::state::{CONFIG, ESCROW_SEEDS, LEDGER, MAPPINGS, MAX_DECIMALS, STATS};

pub fn execute_map_token(
    deps: DepsMut,
    env: Env,
    token: String,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;

    // Mapping twice is tolerated: no event, no message
    if MAPPINGS.is_mapped(deps.storage, token.as_str()) {
        return Ok(Response::new());
    }

    let config = CONFIG.load(deps.storage)?;
    let child_tunnel = config
        .child_tunnel
        .clone()
        .ok_or(ContractError::ChildTunnelNotSet)?;

    let info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(&token, &Cw20QueryMsg::TokenInfo {})?;

    // The child could never deploy the representative token
    if info.decimals > MAX_DECIMALS {
        return Err(ContractError::UnsupportedDecimals {
            decimals: info.decimals,
            max: MAX_DECIMALS,
        });
    }

    // Tokens without the marketing extension map with an empty URI
    let token_uri = deps
        .querier
        .query_wasm_smart::<MarketingInfoResponse>(&token, &Cw20QueryMsg::MarketingInfo {})
        .ok()
        .and_then(|marketing| match marketing.logo {
            Some(LogoInfo::Url(url)) => Some(url),
            _ => None,
        })
        .unwrap_or_default();

    let initial_supply = match config.settlement {
        Settlement::Escrow => {
            let balance: BalanceResponse = deps.querier.query_wasm_smart(
                &token,
                &Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            // Tokens already held by the tunnel back the child's pre-funded supply
            LEDGER.increase(deps.storage, token.as_str(), balance.balance)?;
            ESCROW_SEEDS.save(deps.storage, token.as_str(), &balance.balance)?;
            Some(balance.balance)
        }
        Settlement::MintBurn => None,
    };

    MAPPINGS.register(deps.storage, token.as_str(), None)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.mapped_tokens += 1;
    STATS.save(deps.storage, &stats)?;

    let metadata = TokenMetadata {
        initial_supply,
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        token_uri,
        initial_admin: config.admin.to_string(),
    };
    let outbound = sync_state(
        &config.transport,
        &child_tunnel,
        &SyncMessage::MapToken(MapTokenMessage {
            source_token: token.to_string(),
            metadata: metadata.encode(),
        }),
    )?;

    let message = outbound.hex();

    Ok(Response::new()
        .add_message(outbound.msg)
        .add_attribute("method", "map_token")
        .add_attribute("source_token", token)
        .add_attribute("name", metadata.name)
        .add_attribute("symbol", metadata.symbol)
        .add_attribute("decimals", metadata.decimals.to_string())
        .add_attribute(
            "initial_supply",
            initial_supply.unwrap_or_else(Uint128::zero).to_string(),
        )
        .add_attribute("message", message))
}
