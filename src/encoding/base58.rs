//! Base58 and Base58Check encoding.
//!
//! Conversion works byte-wise on a little-endian digit buffer, so inputs of
//! any length are handled without a big-integer type. Leading zero bytes map
//! to leading `'1'` characters and back.

use crate::crypto::hash::checksum;

/// The Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58Error {
    #[error("Invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Base58Check data too short: {0} bytes")]
    TooShort(usize),

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
}

/// Encodes bytes as Base58.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(58) ~= 1.37
    let mut digits: Vec<u8> = Vec::with_capacity((input.len() - zeros) * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    encoded.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    encoded
}

/// Decodes a Base58 string.
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = input.bytes().take_while(|&c| c == ALPHABET[0]).count();

    let mut bytes: Vec<u8> = Vec::with_capacity(input.len() * 733 / 1000 + 1);
    for (index, character) in input.char_indices() {
        let mut carry = digit_value(character)
            .ok_or(Base58Error::InvalidCharacter { character, index })?;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; zeros];
    decoded.extend(bytes.iter().rev());
    Ok(decoded)
}

/// Appends the 4-byte checksum to `payload` and encodes the result.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decodes a Base58Check string and returns the payload without its checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut data = decode(input)?;
    if data.len() <= CHECKSUM_LEN {
        return Err(Base58Error::TooShort(data.len()));
    }

    let split = data.len() - CHECKSUM_LEN;
    let expected = checksum(&data[..split]);
    if data[split..] != expected {
        return Err(Base58Error::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(&data[split..]),
        });
    }

    data.truncate(split);
    Ok(data)
}

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&a| a == c as u8)
        .map(|p| p as u32)
}
