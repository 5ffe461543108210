//! ABI-style tuple codec for tunnel sync messages
//!
//! Every field occupies one 32-byte word in the head of the tuple. Static
//! fields store their value in place; dynamic fields store the byte offset of
//! their data, measured from the start of the tuple. The tail holds each
//! dynamic field as a length word followed by the data, zero-padded to a
//! word boundary.
//!
//! # Byte Layout of `(address token, uint256 amount)`
//! - Bytes 0-31:   offset of `token` (0x40)
//! - Bytes 32-63:  amount (big-endian, left-padded)
//! - Bytes 64-95:  length of `token`
//! - Bytes 96-..:  UTF-8 bytes of `token`, padded to 32 bytes
//!
//! Addresses are bech32 strings of varying length, so unlike Solidity's ABI
//! they travel as dynamic fields.

use cosmwasm_std::{Uint128, Uint256};
use tiny_keccak::{Hasher, Keccak};

use crate::error::TunnelError;

/// Size of one head word
pub const WORD: usize = 32;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert 32-byte word to hex string (for attributes/errors)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Address,
    Uint,
    Uint8,
    FixedBytes,
    String,
    Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Address(String),
    Uint(Uint256),
    Uint8(u8),
    FixedBytes([u8; 32]),
    String(String),
    Bytes(Vec<u8>),
}

impl From<Uint128> for Token {
    fn from(value: Uint128) -> Self {
        Token::Uint(Uint256::from(value))
    }
}

/// Encode a tuple of tokens.
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match token {
            Token::Uint(value) => head.extend_from_slice(&value.to_be_bytes()),
            Token::Uint8(value) => head.extend_from_slice(&u64_word(*value as u64)),
            Token::FixedBytes(word) => head.extend_from_slice(word),
            Token::Address(value) | Token::String(value) => {
                head.extend_from_slice(&u64_word((head_len + tail.len()) as u64));
                append_dynamic(&mut tail, value.as_bytes());
            }
            Token::Bytes(value) => {
                head.extend_from_slice(&u64_word((head_len + tail.len()) as u64));
                append_dynamic(&mut tail, value);
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// Decode a tuple whose field types are known up front.
///
/// Fails with `MalformedMessage` on truncation, offsets that point outside the
/// data or back into the head, oversized words, and invalid UTF-8.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, TunnelError> {
    let head_len = types.len() * WORD;
    if data.len() < head_len {
        return Err(TunnelError::malformed(format!(
            "head needs {} bytes, got {}",
            head_len,
            data.len()
        )));
    }

    types
        .iter()
        .enumerate()
        .map(|(index, param)| {
            let word = read_word(data, index * WORD)?;
            match param {
                ParamType::Uint => Ok(Token::Uint(Uint256::from_be_bytes(word))),
                ParamType::Uint8 => {
                    if word[..WORD - 1].iter().any(|b| *b != 0) {
                        return Err(TunnelError::malformed(format!(
                            "field {} does not fit in uint8",
                            index
                        )));
                    }
                    Ok(Token::Uint8(word[WORD - 1]))
                }
                ParamType::FixedBytes => Ok(Token::FixedBytes(word)),
                ParamType::Address | ParamType::String | ParamType::Bytes => {
                    let offset = word_to_usize(&word)?;
                    if offset < head_len {
                        return Err(TunnelError::malformed(format!(
                            "field {} offset {} points into the head",
                            index, offset
                        )));
                    }
                    let bytes = read_dynamic(data, offset)?;
                    match param {
                        ParamType::Bytes => Ok(Token::Bytes(bytes.to_vec())),
                        ParamType::String => Ok(Token::String(utf8(bytes, index)?)),
                        _ => Ok(Token::Address(utf8(bytes, index)?)),
                    }
                }
            }
        })
        .collect()
}

/// Sequential reader over decoded tokens.
pub struct TokenReader {
    tokens: std::vec::IntoIter<Token>,
}

impl TokenReader {
    pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Self, TunnelError> {
        Ok(Self {
            tokens: decode(types, data)?.into_iter(),
        })
    }

    pub fn address(&mut self) -> Result<String, TunnelError> {
        match self.next()? {
            Token::Address(value) => Ok(value),
            other => Err(unexpected("address", &other)),
        }
    }

    pub fn string(&mut self) -> Result<String, TunnelError> {
        match self.next()? {
            Token::String(value) => Ok(value),
            other => Err(unexpected("string", &other)),
        }
    }

    pub fn bytes(&mut self) -> Result<Vec<u8>, TunnelError> {
        match self.next()? {
            Token::Bytes(value) => Ok(value),
            other => Err(unexpected("bytes", &other)),
        }
    }

    pub fn fixed_bytes(&mut self) -> Result<[u8; 32], TunnelError> {
        match self.next()? {
            Token::FixedBytes(value) => Ok(value),
            other => Err(unexpected("bytes32", &other)),
        }
    }

    pub fn uint8(&mut self) -> Result<u8, TunnelError> {
        match self.next()? {
            Token::Uint8(value) => Ok(value),
            other => Err(unexpected("uint8", &other)),
        }
    }

    /// Reads a uint256 that must fit the CW20 amount width.
    pub fn amount(&mut self) -> Result<Uint128, TunnelError> {
        match self.next()? {
            Token::Uint(value) => Uint128::try_from(value)
                .map_err(|_| TunnelError::malformed(format!("amount {} exceeds uint128", value))),
            other => Err(unexpected("uint256", &other)),
        }
    }

    fn next(&mut self) -> Result<Token, TunnelError> {
        self.tokens
            .next()
            .ok_or_else(|| TunnelError::malformed("missing field"))
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn append_dynamic(tail: &mut Vec<u8>, data: &[u8]) {
    tail.extend_from_slice(&u64_word(data.len() as u64));
    tail.extend_from_slice(data);
    let padding = (WORD - data.len() % WORD) % WORD;
    tail.resize(tail.len() + padding, 0);
}

fn read_word(data: &[u8], offset: usize) -> Result<[u8; 32], TunnelError> {
    offset
        .checked_add(WORD)
        .and_then(|end| data.get(offset..end))
        .and_then(|slice| <[u8; 32]>::try_from(slice).ok())
        .ok_or_else(|| TunnelError::malformed(format!("no word at offset {}", offset)))
}

fn read_dynamic(data: &[u8], offset: usize) -> Result<&[u8], TunnelError> {
    let len = word_to_usize(&read_word(data, offset)?)?;
    offset
        .checked_add(WORD)
        .and_then(|start| start.checked_add(len).map(|end| (start, end)))
        .and_then(|(start, end)| data.get(start..end))
        .ok_or_else(|| {
            TunnelError::malformed(format!(
                "dynamic field at offset {} with length {} runs past the end",
                offset, len
            ))
        })
}

fn word_to_usize(word: &[u8; 32]) -> Result<usize, TunnelError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(TunnelError::malformed("offset or length exceeds 64 bits"));
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(low))
        .map_err(|_| TunnelError::malformed("offset or length exceeds usize"))
}

fn utf8(bytes: &[u8], index: usize) -> Result<String, TunnelError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| TunnelError::malformed(format!("field {} is not valid UTF-8", index)))
}

fn unexpected(expected: &str, got: &Token) -> TunnelError {
    TunnelError::malformed(format!("expected {}, got {:?}", expected, got))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
    #[test]
    fn test_keccak256_basic() {
        assert_eq!(
            bytes32_to_hex(&keccak256(b"hello")),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            bytes32_to_hex(&keccak256(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_address_amount_layout() {
        let encoded = encode(&[
            Token::Address("cosmwasm1token".to_string()),
            Token::from(Uint128::new(1234)),
        ]);

        assert_eq!(encoded.len(), 4 * WORD);
        // offset of the address = size of the head
        assert_eq!(encoded[31], 0x40);
        assert_eq!(&encoded[32..62], &[0u8; 30]);
        assert_eq!(&encoded[62..64], &1234u16.to_be_bytes());
        // length word then padded data
        assert_eq!(encoded[95], 14);
        assert_eq!(&encoded[96..110], b"cosmwasm1token");
        assert_eq!(&encoded[110..128], &[0u8; 18]);
    }

    #[test]
    fn test_empty_bytes_take_one_tail_word() {
        let encoded = encode(&[Token::FixedBytes([7u8; 32]), Token::Bytes(vec![])]);
        assert_eq!(encoded.len(), 3 * WORD);
        assert_eq!(encoded[63], 0x40);
        assert_eq!(&encoded[64..96], &[0u8; 32]);
    }

    #[test]
    fn test_decode_mixed_tuple() {
        let tokens = vec![
            Token::Uint(Uint256::from(99u128)),
            Token::String("a string longer than a single thirty-two byte word".to_string()),
            Token::String(String::new()),
            Token::Uint8(18),
            Token::Bytes(vec![1, 2, 3]),
            Token::Address("cosmwasm1admin".to_string()),
        ];
        let types = [
            ParamType::Uint,
            ParamType::String,
            ParamType::String,
            ParamType::Uint8,
            ParamType::Bytes,
            ParamType::Address,
        ];
        assert_eq!(decode(&types, &encode(&tokens)).unwrap(), tokens);
    }

    #[test]
    fn test_decode_rejects_truncated_head() {
        let encoded = encode(&[Token::Uint8(1)]);
        let err = decode(&[ParamType::Uint8, ParamType::Uint8], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_decode_rejects_truncated_tail() {
        let mut encoded = encode(&[Token::String("truncate me please".to_string())]);
        encoded.truncate(encoded.len() - WORD);
        let err = decode(&[ParamType::String], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_decode_rejects_offset_outside_data() {
        let mut encoded = encode(&[Token::Bytes(vec![0xAB])]);
        encoded[31] = 0xff;
        let err = decode(&[ParamType::Bytes], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_decode_rejects_offset_into_head() {
        let mut encoded = encode(&[Token::Uint8(5), Token::Bytes(vec![0xAB])]);
        // point the bytes field at the uint8 word
        encoded[63] = 0x00;
        let err = decode(&[ParamType::Uint8, ParamType::Bytes], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_decode_rejects_huge_length() {
        let mut encoded = encode(&[Token::Bytes(vec![0xAB])]);
        encoded[32] = 0x01;
        let err = decode(&[ParamType::Bytes], &encoded).unwrap_err();
        assert_eq!(
            err,
            TunnelError::malformed("offset or length exceeds 64 bits")
        );
    }

    #[test]
    fn test_decode_rejects_wide_uint8() {
        let encoded = encode(&[Token::Uint(Uint256::from(256u128))]);
        let err = decode(&[ParamType::Uint8], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let encoded = encode(&[Token::Bytes(vec![0xff, 0xfe])]);
        let err = decode(&[ParamType::String], &encoded).unwrap_err();
        assert!(matches!(err, TunnelError::MalformedMessage { .. }));
    }

    #[test]
    fn test_reader_rejects_amount_above_uint128() {
        let encoded = encode(&[Token::Uint(Uint256::MAX)]);
        let mut reader = TokenReader::decode(&[ParamType::Uint], &encoded).unwrap();
        assert!(matches!(
            reader.amount(),
            Err(TunnelError::MalformedMessage { .. })
        ));
    }
}
