//! End-to-end tunnel tests: root and child tunnels wired through the mock
//! transport, with every queued message relayed to its receiver.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, Logo, MinterResponse, TokenInfoResponse};
use cw20_base::msg::{InstantiateMarketingInfo, InstantiateMsg as Cw20InstantiateMsg};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use tunnel_common::testing::{
    contract_cw20, cw20_balance, cw20_supply, instantiate_transport, sent_messages,
};
use tunnel_common::Settlement;

const ESCROW_PREFUND: u128 = 1234;

fn contract_root_tunnel() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        root_tunnel::contract::execute,
        root_tunnel::contract::instantiate,
        root_tunnel::contract::query,
    );
    Box::new(contract)
}

fn contract_child_tunnel() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        child_tunnel::contract::execute,
        child_tunnel::contract::instantiate,
        child_tunnel::contract::query,
    )
    .with_reply(child_tunnel::contract::reply);
    Box::new(contract)
}

struct Bridge {
    app: App,
    transport: Addr,
    root: Addr,
    child: Addr,
    token: Addr,
    alice: Addr,
    bob: Addr,
    relayed: u64,
}

impl Bridge {
    fn new(settlement: Settlement) -> Self {
        Self::with_token(settlement, "Tunnel Token", "TUN", ESCROW_PREFUND)
    }

    /// Escrow tunnels hold `prefund` source tokens before mapping.
    fn with_token(settlement: Settlement, name: &str, symbol: &str, prefund: u128) -> Self {
        let mut app = App::default();
        let admin = Addr::unchecked("admin");
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        let transport = instantiate_transport(&mut app, &admin);
        let cw20_code_id = app.store_code(contract_cw20());
        let root_code_id = app.store_code(contract_root_tunnel());
        let child_code_id = app.store_code(contract_child_tunnel());

        let root = app
            .instantiate_contract(
                root_code_id,
                admin.clone(),
                &root_tunnel::msg::InstantiateMsg {
                    admin: admin.to_string(),
                    transport: transport.to_string(),
                    child_tunnel: None,
                    settlement,
                },
                &[],
                "root-tunnel",
                None,
            )
            .unwrap();

        let child = app
            .instantiate_contract(
                child_code_id,
                admin.clone(),
                &child_tunnel::msg::InstantiateMsg {
                    admin: admin.to_string(),
                    transport: transport.to_string(),
                    root_tunnel: Some(root.to_string()),
                    token_code_id: cw20_code_id,
                    settlement,
                },
                &[],
                "child-tunnel",
                None,
            )
            .unwrap();

        app.execute_contract(
            admin.clone(),
            root.clone(),
            &root_tunnel::msg::ExecuteMsg::SetChildTunnel {
                child_tunnel: child.to_string(),
            },
            &[],
        )
        .unwrap();

        let mut initial_balances = vec![Cw20Coin {
            address: alice.to_string(),
            amount: Uint128::new(1000),
        }];
        let mint = match settlement {
            Settlement::Escrow => {
                if prefund > 0 {
                    initial_balances.push(Cw20Coin {
                        address: root.to_string(),
                        amount: Uint128::new(prefund),
                    });
                }
                None
            }
            Settlement::MintBurn => Some(MinterResponse {
                minter: root.to_string(),
                cap: None,
            }),
        };

        let token = app
            .instantiate_contract(
                cw20_code_id,
                admin.clone(),
                &Cw20InstantiateMsg {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    decimals: 6,
                    initial_balances,
                    mint,
                    marketing: Some(InstantiateMarketingInfo {
                        project: None,
                        description: None,
                        marketing: Some(admin.to_string()),
                        logo: Some(Logo::Url("test".to_string())),
                    }),
                },
                &[],
                "tunnel-token",
                None,
            )
            .unwrap();

        Bridge {
            app,
            transport,
            root,
            child,
            token,
            alice,
            bob,
            relayed: 0,
        }
    }

    /// Deliver every queued message, including the ones queued while relaying.
    fn relay_all(&mut self) {
        loop {
            let pending = sent_messages(&self.app, &self.transport, Some(self.relayed));
            if pending.is_empty() {
                return;
            }
            for message in pending {
                if message.receiver == self.child.as_str() {
                    self.app
                        .execute_contract(
                            self.transport.clone(),
                            self.child.clone(),
                            &child_tunnel::msg::ExecuteMsg::ProcessMessageFromRoot {
                                state_id: message.id,
                                root_message_sender: message.sender.clone(),
                                message: message.data.clone(),
                            },
                            &[],
                        )
                        .unwrap();
                } else {
                    self.app
                        .execute_contract(
                            self.transport.clone(),
                            self.root.clone(),
                            &root_tunnel::msg::ExecuteMsg::ProcessMessageFromChild {
                                exit_id: message.id,
                                child_message_sender: message.sender.clone(),
                                message: message.data.clone(),
                            },
                            &[],
                        )
                        .unwrap();
                }
                self.relayed = message.id;
            }
        }
    }

    fn map_token(&mut self) -> Addr {
        self.app
            .execute_contract(
                self.alice.clone(),
                self.root.clone(),
                &root_tunnel::msg::ExecuteMsg::MapToken {
                    token: self.token.to_string(),
                },
                &[],
            )
            .unwrap();
        self.relay_all();
        self.representative()
    }

    fn representative(&self) -> Addr {
        let res: root_tunnel::msg::TokenMappingResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.root,
                &root_tunnel::msg::QueryMsg::TokenMapping {
                    token: self.token.to_string(),
                },
            )
            .unwrap();
        assert!(!res.pending);
        Addr::unchecked(res.mapping.unwrap().representative_token.unwrap())
    }

    fn deposit_to(&mut self, recipient: &Addr, amount: u128) {
        self.try_deposit_to(recipient, amount).unwrap();
    }

    fn try_deposit_to(&mut self, recipient: &Addr, amount: u128) -> Result<(), String> {
        self.app
            .execute_contract(
                self.alice.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.root.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
        self.app
            .execute_contract(
                self.alice.clone(),
                self.root.clone(),
                &root_tunnel::msg::ExecuteMsg::DepositTo {
                    token: self.token.to_string(),
                    recipient: recipient.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .map_err(|err| err.root_cause().to_string())?;
        self.relay_all();
        Ok(())
    }

    fn withdraw_to(&mut self, from: &Addr, recipient: &Addr, representative: &Addr, amount: u128) {
        self.app
            .execute_contract(
                from.clone(),
                representative.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.child.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
        self.app
            .execute_contract(
                from.clone(),
                self.child.clone(),
                &child_tunnel::msg::ExecuteMsg::WithdrawTo {
                    representative_token: representative.to_string(),
                    recipient: recipient.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
        self.relay_all();
    }

    fn root_ledger(&self) -> Uint128 {
        let res: root_tunnel::msg::LedgerResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.root,
                &root_tunnel::msg::QueryMsg::Ledger {
                    token: self.token.to_string(),
                },
            )
            .unwrap();
        res.amount
    }

    fn child_ledger(&self, representative: &Addr) -> Uint128 {
        let res: child_tunnel::msg::LedgerResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.child,
                &child_tunnel::msg::QueryMsg::Ledger {
                    token: representative.to_string(),
                },
            )
            .unwrap();
        res.amount
    }
}

#[test]
fn test_escrow_round_trip_conserves_value() {
    let mut bridge = Bridge::new(Settlement::Escrow);
    let representative = bridge.map_token();

    // the child mirrors what the root already holds
    assert_eq!(
        cw20_supply(&bridge.app, &representative),
        Uint128::new(ESCROW_PREFUND)
    );
    assert_eq!(
        cw20_balance(&bridge.app, &representative, &bridge.child),
        Uint128::new(ESCROW_PREFUND)
    );
    assert_eq!(bridge.root_ledger(), Uint128::new(ESCROW_PREFUND));
    assert_eq!(
        bridge.child_ledger(&representative),
        Uint128::new(ESCROW_PREFUND)
    );

    let (alice, bob) = (bridge.alice.clone(), bridge.bob.clone());
    bridge.deposit_to(&bob, 12);

    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &alice),
        Uint128::new(988)
    );
    assert_eq!(
        cw20_balance(&bridge.app, &representative, &bob),
        Uint128::new(12)
    );
    assert_eq!(bridge.root_ledger(), Uint128::new(ESCROW_PREFUND + 12));
    assert_eq!(
        bridge.child_ledger(&representative),
        Uint128::new(ESCROW_PREFUND - 12)
    );

    bridge.withdraw_to(&bob, &alice, &representative, 12);

    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &alice),
        Uint128::new(1000)
    );
    assert!(cw20_balance(&bridge.app, &representative, &bob).is_zero());
    assert_eq!(bridge.root_ledger(), Uint128::new(ESCROW_PREFUND));
    assert_eq!(
        bridge.child_ledger(&representative),
        Uint128::new(ESCROW_PREFUND)
    );
    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &bridge.root),
        Uint128::new(ESCROW_PREFUND)
    );
    // MAP_TOKEN, MAPPING_CONFIRMED, DEPOSIT, WITHDRAW
    assert_eq!(bridge.relayed, 4);
}

#[test]
fn test_mint_burn_round_trip_conserves_supply() {
    let mut bridge = Bridge::new(Settlement::MintBurn);
    let representative = bridge.map_token();
    assert!(cw20_supply(&bridge.app, &representative).is_zero());

    let (alice, bob) = (bridge.alice.clone(), bridge.bob.clone());
    bridge.deposit_to(&bob, 300);

    assert_eq!(cw20_supply(&bridge.app, &bridge.token), Uint128::new(700));
    assert_eq!(cw20_supply(&bridge.app, &representative), Uint128::new(300));
    assert_eq!(bridge.root_ledger(), Uint128::new(300));
    assert_eq!(bridge.child_ledger(&representative), Uint128::new(300));

    bridge.withdraw_to(&bob, &alice, &representative, 120);

    assert_eq!(cw20_supply(&bridge.app, &bridge.token), Uint128::new(820));
    assert_eq!(cw20_supply(&bridge.app, &representative), Uint128::new(180));
    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &alice),
        Uint128::new(820)
    );
    // child ledger tracks the representative supply, root ledger mirrors it
    assert_eq!(bridge.child_ledger(&representative), Uint128::new(180));
    assert_eq!(bridge.root_ledger(), Uint128::new(180));
}

#[test]
fn test_mapping_twice_does_not_redeploy() {
    let mut bridge = Bridge::new(Settlement::MintBurn);
    let representative = bridge.map_token();
    let queued = sent_messages(&bridge.app, &bridge.transport, None).len();

    let again = bridge.map_token();
    assert_eq!(again, representative);
    assert_eq!(
        sent_messages(&bridge.app, &bridge.transport, None).len(),
        queued
    );
}

#[test]
fn test_long_name_and_symbol_round_trip() {
    let long_name = "The Extremely Verbose Cross Chain Tunnel Token";
    assert_eq!(long_name.len(), 46);
    let mut bridge = Bridge::with_token(Settlement::MintBurn, long_name, "ABCDEFGHIJKL", 0);
    let representative = bridge.map_token();

    let info: TokenInfoResponse = bridge
        .app
        .wrap()
        .query_wasm_smart(&representative, &Cw20QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.symbol, "ABCDEFGHIJKp");
    assert_eq!(info.name, format!("{} (Polygon)", &long_name[..40]));

    let (alice, bob) = (bridge.alice.clone(), bridge.bob.clone());
    bridge.deposit_to(&bob, 250);
    assert_eq!(
        cw20_balance(&bridge.app, &representative, &bob),
        Uint128::new(250)
    );

    bridge.withdraw_to(&bob, &alice, &representative, 250);
    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &alice),
        Uint128::new(1000)
    );
    assert!(cw20_supply(&bridge.app, &representative).is_zero());
}

#[test]
fn test_escrow_deposit_is_bounded_by_child_custody() {
    let mut bridge = Bridge::with_token(Settlement::Escrow, "Tunnel Token", "TUN", 0);
    let representative = bridge.map_token();
    assert!(cw20_supply(&bridge.app, &representative).is_zero());

    // nothing was pre-funded, so the child has nothing to release
    let bob = bridge.bob.clone();
    let err = bridge.try_deposit_to(&bob, 10).unwrap_err();
    assert!(err.contains("Insufficient child custody"));
    assert!(err.contains("available 0, requested 10"));
    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &bridge.alice),
        Uint128::new(1000)
    );
    assert!(bridge.root_ledger().is_zero());
}

#[test]
fn test_escrow_deposits_track_child_custody() {
    let mut bridge = Bridge::with_token(Settlement::Escrow, "Tunnel Token", "TUN", 300);
    let representative = bridge.map_token();
    let (alice, bob) = (bridge.alice.clone(), bridge.bob.clone());

    bridge.deposit_to(&bob, 300);
    assert!(bridge.child_ledger(&representative).is_zero());

    let err = bridge.try_deposit_to(&bob, 1).unwrap_err();
    assert!(err.contains("available 0, requested 1"));

    // a withdrawal refills the child's custody
    bridge.withdraw_to(&bob, &alice, &representative, 100);
    assert_eq!(bridge.child_ledger(&representative), Uint128::new(100));
    bridge.deposit_to(&bob, 100);

    assert_eq!(
        cw20_balance(&bridge.app, &representative, &bob),
        Uint128::new(300)
    );
    assert_eq!(bridge.root_ledger(), Uint128::new(600));
    assert_eq!(
        cw20_balance(&bridge.app, &bridge.token, &bridge.root),
        Uint128::new(600)
    );
}
