//! Messages relayed from the root tunnel.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Env, MessageInfo, Response, SubMsg, WasmMsg,
};
use cw20::{Cw20Coin, Logo, MinterResponse};
use cw20_base::msg::{InstantiateMarketingInfo, InstantiateMsg as Cw20InstantiateMsg};
use tunnel_common::codec::bytes32_to_hex;
use tunnel_common::{
    DepositMessage, MapTokenMessage, Settlement, SyncMessage, TokenMetadata, TunnelError,
};

use crate::error::ContractError;
use crate::state::{
    Config, PendingDeployment, CONFIG, DEPLOY_TOKEN_REPLY_ID, LEDGER, MAPPINGS, MAX_NAME_BYTES,
    MAX_SYMBOL_LEN, MIN_SYMBOL_LEN, NAME_SUFFIX, PENDING_DEPLOYMENT, PROCESSED_STATES, STATS,
    SYMBOL_FILL, SYMBOL_SUFFIX,
};

pub fn execute_process_message_from_root(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state_id: u64,
    root_message_sender: String,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.transport {
        return Err(ContractError::InvalidSender {
            sender: info.sender.to_string(),
        });
    }

    if config.root_tunnel.as_ref().map(Addr::as_str) != Some(root_message_sender.as_str()) {
        return Err(ContractError::InvalidSenderFromRoot {
            sender: root_message_sender,
        });
    }

    if PROCESSED_STATES.has(deps.storage, state_id) {
        return Err(ContractError::StateAlreadyProcessed { state_id });
    }
    PROCESSED_STATES.save(deps.storage, state_id, &true)?;

    let response = match SyncMessage::decode(message.as_slice())? {
        SyncMessage::MapToken(map_token) => process_map_token(deps, env, &config, map_token)?,
        SyncMessage::Deposit(deposit) => process_deposit(deps, &config, deposit)?,
        // Child -> root messages have no business arriving here
        other => {
            return Err(TunnelError::InvalidSyncType {
                tag: bytes32_to_hex(&other.tag()),
            }
            .into())
        }
    };

    Ok(response.add_attribute("state_id", state_id.to_string()))
}

/// Instantiate the representative token. Registration happens in the reply,
/// once the token address is known.
fn process_map_token(
    deps: DepsMut,
    env: Env,
    config: &Config,
    msg: MapTokenMessage,
) -> Result<Response, ContractError> {
    if let Some(existing) = MAPPINGS.lookup(deps.storage, &msg.source_token)? {
        return Err(TunnelError::TokenAlreadyMapped {
            source_token: existing.source_token.clone(),
            representative_token: existing.representative_or_null().to_string(),
        }
        .into());
    }

    let escrow = config.settlement == Settlement::Escrow;
    let metadata = TokenMetadata::decode(&msg.metadata, escrow)?;
    let initial_admin = deps.api.addr_validate(&metadata.initial_admin)?;
    let initial_supply = metadata.initial_supply.unwrap_or_default();
    let tunnel = env.contract.address.to_string();

    let (initial_balances, mint) = match config.settlement {
        Settlement::Escrow if initial_supply.is_zero() => (vec![], None),
        Settlement::Escrow => (
            vec![Cw20Coin {
                address: tunnel,
                amount: initial_supply,
            }],
            None,
        ),
        Settlement::MintBurn => (
            vec![],
            Some(MinterResponse {
                minter: tunnel,
                cap: None,
            }),
        ),
    };

    let name = representative_name(&metadata.name);
    let symbol = representative_symbol(&metadata.symbol);
    let logo = (!metadata.token_uri.is_empty()).then(|| Logo::Url(metadata.token_uri.clone()));

    let instantiate = Cw20InstantiateMsg {
        name: name.clone(),
        symbol: symbol.clone(),
        decimals: metadata.decimals,
        initial_balances,
        mint,
        marketing: Some(InstantiateMarketingInfo {
            project: None,
            description: None,
            marketing: Some(initial_admin.to_string()),
            logo,
        }),
    };

    PENDING_DEPLOYMENT.save(
        deps.storage,
        &PendingDeployment {
            source_token: msg.source_token.clone(),
            initial_supply,
        },
    )?;

    let deploy = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: Some(initial_admin.to_string()),
            code_id: config.token_code_id,
            msg: to_json_binary(&instantiate)?,
            funds: vec![],
            label: format!("{} for {}", symbol, msg.source_token),
        },
        DEPLOY_TOKEN_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(deploy)
        .add_attribute("method", "map_token")
        .add_attribute("source_token", msg.source_token)
        .add_attribute("name", name)
        .add_attribute("symbol", symbol)
        .add_attribute("decimals", metadata.decimals.to_string())
        .add_attribute("initial_supply", initial_supply))
}

/// Source name plus [`NAME_SUFFIX`], cut on a char boundary so the result
/// stays within [`MAX_NAME_BYTES`].
fn representative_name(name: &str) -> String {
    let budget = MAX_NAME_BYTES - NAME_SUFFIX.len();
    let mut end = name.len().min(budget);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &name[..end], NAME_SUFFIX)
}

/// Source symbol plus [`SYMBOL_SUFFIX`], restricted to the characters and
/// length `cw20-base` accepts.
fn representative_symbol(symbol: &str) -> String {
    let budget = MAX_SYMBOL_LEN - SYMBOL_SUFFIX.len();
    let mut base: String = symbol
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-')
        .take(budget)
        .collect();
    while base.len() + SYMBOL_SUFFIX.len() < MIN_SYMBOL_LEN {
        base.push(SYMBOL_FILL);
    }
    base + SYMBOL_SUFFIX
}

fn process_deposit(
    deps: DepsMut,
    config: &Config,
    msg: DepositMessage,
) -> Result<Response, ContractError> {
    let representative = MAPPINGS
        .lookup_strict(deps.storage, &msg.source_token)?
        .representative_token
        .ok_or_else(|| TunnelError::TokenNotMapped {
            token: msg.source_token.clone(),
        })?;
    let token = deps.api.addr_validate(&representative)?;
    let recipient = deps.api.addr_validate(&msg.recipient)?;

    if msg.amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    match config.settlement {
        Settlement::Escrow => LEDGER.decrease(deps.storage, token.as_str(), msg.amount)?,
        Settlement::MintBurn => LEDGER.increase(deps.storage, token.as_str(), msg.amount)?,
    };

    let mut stats = STATS.load(deps.storage)?;
    stats.deposits += 1;
    STATS.save(deps.storage, &stats)?;

    let release = config.settlement.release(&token, &recipient, msg.amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("method", "deposit")
        .add_attribute("source_token", msg.source_token)
        .add_attribute("representative_token", token)
        .add_attribute("depositor", msg.depositor)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", msg.amount))
}
