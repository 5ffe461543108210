//! Sync messages exchanged between the root and child tunnels.
//!
//! The envelope is `(bytes32 tag, bytes payload)` where the tag is the
//! keccak256 of the message name. Payloads are nested tuples so a receiver can
//! route on the tag before touching the body.

use cosmwasm_std::Uint128;

use crate::codec::{bytes32_to_hex, encode, keccak256, ParamType, Token, TokenReader};
use crate::error::TunnelError;

pub const MAP_TOKEN: &str = "MAP_TOKEN";
pub const DEPOSIT: &str = "DEPOSIT";
pub const WITHDRAW: &str = "WITHDRAW";
pub const MAPPING_CONFIRMED: &str = "MAPPING_CONFIRMED";

/// Type tag of a sync message: keccak256 of its name.
pub fn sync_type(name: &str) -> [u8; 32] {
    keccak256(name.as_bytes())
}

/// Root → child: first-time mapping of a source token.
///
/// `metadata` stays encoded; the child decodes it with the layout of its own
/// settlement strategy (see [`TokenMetadata::decode`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTokenMessage {
    pub source_token: String,
    pub metadata: Vec<u8>,
}

/// Root → child: value locked or burned on the root chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositMessage {
    pub source_token: String,
    pub depositor: String,
    pub recipient: String,
    pub amount: Uint128,
}

/// Child → root: value locked or burned on the child chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawMessage {
    pub source_token: String,
    pub representative_token: String,
    pub withdrawer: String,
    pub recipient: String,
    pub amount: Uint128,
}

/// Child → root: the representative token for `source_token` now exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfirmedMessage {
    pub source_token: String,
    pub representative_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncMessage {
    MapToken(MapTokenMessage),
    Deposit(DepositMessage),
    Withdraw(WithdrawMessage),
    MappingConfirmed(MappingConfirmedMessage),
}

impl SyncMessage {
    pub fn name(&self) -> &'static str {
        match self {
            SyncMessage::MapToken(_) => MAP_TOKEN,
            SyncMessage::Deposit(_) => DEPOSIT,
            SyncMessage::Withdraw(_) => WITHDRAW,
            SyncMessage::MappingConfirmed(_) => MAPPING_CONFIRMED,
        }
    }

    pub fn tag(&self) -> [u8; 32] {
        sync_type(self.name())
    }

    pub fn encode(&self) -> Vec<u8> {
        let payload = match self {
            SyncMessage::MapToken(msg) => encode(&[
                Token::Address(msg.source_token.clone()),
                Token::Bytes(msg.metadata.clone()),
            ]),
            SyncMessage::Deposit(msg) => encode(&[
                Token::Address(msg.source_token.clone()),
                Token::Address(msg.depositor.clone()),
                Token::Address(msg.recipient.clone()),
                Token::from(msg.amount),
            ]),
            SyncMessage::Withdraw(msg) => encode(&[
                Token::Address(msg.source_token.clone()),
                Token::Address(msg.representative_token.clone()),
                Token::Address(msg.withdrawer.clone()),
                Token::Address(msg.recipient.clone()),
                Token::from(msg.amount),
            ]),
            SyncMessage::MappingConfirmed(msg) => encode(&[
                Token::Address(msg.source_token.clone()),
                Token::Address(msg.representative_token.clone()),
            ]),
        };
        encode(&[Token::FixedBytes(self.tag()), Token::Bytes(payload)])
    }

    /// Decode an envelope, rejecting unknown tags with `InvalidSyncType`.
    pub fn decode(data: &[u8]) -> Result<Self, TunnelError> {
        let mut envelope = TokenReader::decode(&[ParamType::FixedBytes, ParamType::Bytes], data)?;
        let tag = envelope.fixed_bytes()?;
        let payload = envelope.bytes()?;

        if tag == sync_type(MAP_TOKEN) {
            let mut body = TokenReader::decode(&[ParamType::Address, ParamType::Bytes], &payload)?;
            Ok(SyncMessage::MapToken(MapTokenMessage {
                source_token: body.address()?,
                metadata: body.bytes()?,
            }))
        } else if tag == sync_type(DEPOSIT) {
            let mut body = TokenReader::decode(
                &[
                    ParamType::Address,
                    ParamType::Address,
                    ParamType::Address,
                    ParamType::Uint,
                ],
                &payload,
            )?;
            Ok(SyncMessage::Deposit(DepositMessage {
                source_token: body.address()?,
                depositor: body.address()?,
                recipient: body.address()?,
                amount: body.amount()?,
            }))
        } else if tag == sync_type(WITHDRAW) {
            let mut body = TokenReader::decode(
                &[
                    ParamType::Address,
                    ParamType::Address,
                    ParamType::Address,
                    ParamType::Address,
                    ParamType::Uint,
                ],
                &payload,
            )?;
            Ok(SyncMessage::Withdraw(WithdrawMessage {
                source_token: body.address()?,
                representative_token: body.address()?,
                withdrawer: body.address()?,
                recipient: body.address()?,
                amount: body.amount()?,
            }))
        } else if tag == sync_type(MAPPING_CONFIRMED) {
            let mut body =
                TokenReader::decode(&[ParamType::Address, ParamType::Address], &payload)?;
            Ok(SyncMessage::MappingConfirmed(MappingConfirmedMessage {
                source_token: body.address()?,
                representative_token: body.address()?,
            }))
        } else {
            Err(TunnelError::InvalidSyncType {
                tag: bytes32_to_hex(&tag),
            })
        }
    }
}

/// Source-token metadata carried by `MAP_TOKEN`.
///
/// `initial_supply` is present only for escrow tunnels, where the child
/// pre-funds itself with the amount the root holds in custody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub initial_supply: Option<Uint128>,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub token_uri: String,
    pub initial_admin: String,
}

impl TokenMetadata {
    pub fn encode(&self) -> Vec<u8> {
        let mut tokens = Vec::with_capacity(6);
        if let Some(initial_supply) = self.initial_supply {
            tokens.push(Token::from(initial_supply));
        }
        tokens.extend([
            Token::String(self.name.clone()),
            Token::String(self.symbol.clone()),
            Token::Uint8(self.decimals),
            Token::String(self.token_uri.clone()),
            Token::Address(self.initial_admin.clone()),
        ]);
        encode(&tokens)
    }

    pub fn decode(data: &[u8], with_initial_supply: bool) -> Result<Self, TunnelError> {
        let mut types = Vec::with_capacity(6);
        if with_initial_supply {
            types.push(ParamType::Uint);
        }
        types.extend([
            ParamType::String,
            ParamType::String,
            ParamType::Uint8,
            ParamType::String,
            ParamType::Address,
        ]);

        let mut reader = TokenReader::decode(&types, data)?;
        let initial_supply = if with_initial_supply {
            Some(reader.amount()?)
        } else {
            None
        };
        Ok(TokenMetadata {
            initial_supply,
            name: reader.string()?,
            symbol: reader.string()?,
            decimals: reader.uint8()?,
            token_uri: reader.string()?,
            initial_admin: reader.address()?,
        })
    }
}
