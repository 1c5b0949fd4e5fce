//! Legacy (P2PKH) Bitcoin address representation and utilities.

use std::fmt;
use std::str::FromStr;

use super::hash::{checksum, hash160};
use super::PublicKey;
use crate::encoding::base58::{self, Base58Error};
use crate::error::Result;

/// Version byte of mainnet pay-to-pubkey-hash addresses.
pub const MAINNET_VERSION: u8 = 0x00;

/// Version byte plus the 20-byte HASH160.
pub const PAYLOAD_LEN: usize = 21;

/// Payload plus the 4-byte checksum.
pub const EXTENDED_LEN: usize = PAYLOAD_LEN + 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Invalid address encoding: {0}")]
    Base58(#[from] Base58Error),

    #[error("Invalid address length: expected 25 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Unsupported address version: 0x{0:02x}")]
    UnsupportedVersion(u8),
}

/// A legacy Bitcoin address (version byte + 20-byte public key hash).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; PAYLOAD_LEN]);

impl Address {
    /// Derives the address of an uncompressed public key.
    ///
    /// Process:
    /// 1. SHA-256 the 65-byte serialized key
    /// 2. RIPEMD-160 the digest
    /// 3. Prefix the 20-byte result with the version byte
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = MAINNET_VERSION;
        payload[1..].copy_from_slice(&hash160(public_key.as_bytes()));
        Self(payload)
    }

    /// Returns the version byte.
    #[inline]
    pub fn version(&self) -> u8 {
        self.0[0]
    }

    /// Returns the 20-byte HASH160 of the public key.
    pub fn pubkey_hash(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Returns the 21-byte payload (version + hash).
    #[inline]
    pub fn payload(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    /// Returns the 4-byte checksum of the payload.
    pub fn checksum(&self) -> [u8; 4] {
        checksum(&self.0)
    }

    /// Returns `payload || checksum`, the bytes that get Base58-encoded.
    pub fn to_extended_bytes(&self) -> [u8; EXTENDED_LEN] {
        let mut extended = [0u8; EXTENDED_LEN];
        extended[..PAYLOAD_LEN].copy_from_slice(&self.0);
        extended[PAYLOAD_LEN..].copy_from_slice(&self.checksum());
        extended
    }

    /// Returns the Base58Check string form.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.to_extended_bytes())
    }
}

/// Encodes raw public key bytes as an address.
///
/// Fails with `InvalidInput` unless `public_key` is 65 bytes starting with `0x04`.
pub fn encode_address(public_key: &[u8]) -> Result<Address> {
    let public_key = PublicKey::from_slice(public_key)?;
    Ok(Address::from_public_key(&public_key))
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let raw = base58::decode(s)?;
        if raw.len() != EXTENDED_LEN {
            return Err(AddressError::InvalidLength(raw.len()));
        }

        let payload = base58::decode_check(s)?;
        if payload[0] != MAINNET_VERSION {
            return Err(AddressError::UnsupportedVersion(payload[0]));
        }

        let mut bytes = [0u8; PAYLOAD_LEN];
        bytes.copy_from_slice(&payload);
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
