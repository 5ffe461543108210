//! Settlement strategies and the per-token ledger.
//!
//! A tunnel settles value either by holding tokens in custody (`Escrow`) or by
//! destroying and re-creating them (`MintBurn`). The strategy is fixed at
//! instantiation; only the CW20 messages differ between the two.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, StdError, StdResult, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Map;

use crate::error::TunnelError;

#[cw_serde]
#[derive(Copy)]
pub enum Settlement {
    /// Tokens are locked in the tunnel and released on the reverse flow
    Escrow,
    /// Tokens are burned on the sending side and minted on the receiving side
    MintBurn,
}

impl Settlement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Settlement::Escrow => "escrow",
            Settlement::MintBurn => "mint_burn",
        }
    }

    /// Messages that take `amount` away from `owner` on an outbound transfer
    /// initiated by a direct call (allowance required).
    pub fn pull(
        &self,
        token: &Addr,
        owner: &Addr,
        custodian: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        let msg = match self {
            Settlement::Escrow => Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: custodian.to_string(),
                amount,
            },
            Settlement::MintBurn => Cw20ExecuteMsg::BurnFrom {
                owner: owner.to_string(),
                amount,
            },
        };
        cw20_msg(token, &msg)
    }

    /// Messages for an outbound transfer whose tokens were already sent to the
    /// tunnel through the CW20 receive hook.
    pub fn settle_received(&self, token: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        match self {
            Settlement::Escrow => Ok(vec![]),
            Settlement::MintBurn => Ok(vec![cw20_msg(token, &Cw20ExecuteMsg::Burn { amount })?]),
        }
    }

    /// Message crediting `recipient` on an inbound transfer.
    pub fn release(&self, token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            Settlement::Escrow => Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            },
            Settlement::MintBurn => Cw20ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            },
        };
        cw20_msg(token, &msg)
    }
}

fn cw20_msg(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// Per-token amount tracked by a tunnel: tokens in custody for escrow, net
/// bridged supply for mint/burn. Never negative.
pub struct Ledger<'a>(Map<'a, &'a str, Uint128>);

impl<'a> Ledger<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Self(Map::new(namespace))
    }

    pub fn balance(&self, storage: &dyn Storage, token: &'a str) -> StdResult<Uint128> {
        Ok(self.0.may_load(storage, token)?.unwrap_or_default())
    }

    pub fn increase(
        &self,
        storage: &mut dyn Storage,
        token: &'a str,
        amount: Uint128,
    ) -> Result<Uint128, TunnelError> {
        let updated = self
            .balance(storage, token)?
            .checked_add(amount)
            .map_err(StdError::from)?;
        self.0.save(storage, token, &updated)?;
        Ok(updated)
    }

    pub fn decrease(
        &self,
        storage: &mut dyn Storage,
        token: &'a str,
        amount: Uint128,
    ) -> Result<Uint128, TunnelError> {
        let available = self.balance(storage, token)?;
        let updated = available
            .checked_sub(amount)
            .map_err(|_| TunnelError::InsufficientLedger {
                token: token.to_string(),
                available,
                requested: amount,
            })?;
        self.0.save(storage, token, &updated)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_json, testing::MockStorage};

    const LEDGER: Ledger = Ledger::new("ledger");

    #[test]
    fn test_ledger_never_goes_negative() {
        let mut storage = MockStorage::new();
        LEDGER
            .increase(&mut storage, "token", Uint128::new(1234))
            .unwrap();
        LEDGER
            .decrease(&mut storage, "token", Uint128::new(34))
            .unwrap();
        assert_eq!(
            LEDGER.balance(&storage, "token").unwrap(),
            Uint128::new(1200)
        );

        let err = LEDGER
            .decrease(&mut storage, "token", Uint128::new(1201))
            .unwrap_err();
        assert_eq!(
            err,
            TunnelError::InsufficientLedger {
                token: "token".to_string(),
                available: Uint128::new(1200),
                requested: Uint128::new(1201),
            }
        );
        assert_eq!(
            LEDGER.balance(&storage, "token").unwrap(),
            Uint128::new(1200)
        );
    }

    #[test]
    fn test_unknown_token_has_zero_balance() {
        let storage = MockStorage::new();
        assert!(LEDGER.balance(&storage, "token").unwrap().is_zero());
    }

    fn decode(msg: CosmosMsg) -> (String, Cw20ExecuteMsg) {
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => (contract_addr, from_json(msg).unwrap()),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_escrow_messages() {
        let token = Addr::unchecked("token");
        let owner = Addr::unchecked("owner");
        let tunnel = Addr::unchecked("tunnel");
        let amount = Uint128::new(12);

        let (contract, pull) = decode(Settlement::Escrow.pull(&token, &owner, &tunnel, amount).unwrap());
        assert_eq!(contract, "token");
        assert_eq!(
            pull,
            Cw20ExecuteMsg::TransferFrom {
                owner: "owner".to_string(),
                recipient: "tunnel".to_string(),
                amount,
            }
        );

        assert!(Settlement::Escrow
            .settle_received(&token, amount)
            .unwrap()
            .is_empty());

        let (_, release) = decode(Settlement::Escrow.release(&token, &owner, amount).unwrap());
        assert_eq!(
            release,
            Cw20ExecuteMsg::Transfer {
                recipient: "owner".to_string(),
                amount,
            }
        );
    }

    #[test]
    fn test_mint_burn_messages() {
        let token = Addr::unchecked("token");
        let owner = Addr::unchecked("owner");
        let tunnel = Addr::unchecked("tunnel");
        let amount = Uint128::new(12);

        let (_, pull) = decode(Settlement::MintBurn.pull(&token, &owner, &tunnel, amount).unwrap());
        assert_eq!(
            pull,
            Cw20ExecuteMsg::BurnFrom {
                owner: "owner".to_string(),
                amount,
            }
        );

        let mut received = Settlement::MintBurn.settle_received(&token, amount).unwrap();
        assert_eq!(received.len(), 1);
        let (_, burn) = decode(received.remove(0));
        assert_eq!(burn, Cw20ExecuteMsg::Burn { amount });

        let (_, release) = decode(Settlement::MintBurn.release(&token, &owner, amount).unwrap());
        assert_eq!(
            release,
            Cw20ExecuteMsg::Mint {
                recipient: "owner".to_string(),
                amount,
            }
        );
    }
}
