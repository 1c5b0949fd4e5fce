//! Public key derivation on secp256k1.

use std::fmt;

use secp256k1::{All, Secp256k1, SecretKey};

use super::PrivateKey;
use crate::error::{Error, Result};

/// Length of an uncompressed SEC1 public key.
pub const PUBLIC_KEY_LEN: usize = 65;

/// Prefix byte of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// An uncompressed public key: `0x04 || X || Y`, coordinates big-endian.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Validates and copies an uncompressed public key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(Error::InvalidInput(format!(
                "public key must be {} bytes, got {}",
                PUBLIC_KEY_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != UNCOMPRESSED_PREFIX {
            return Err(Error::InvalidInput(format!(
                "public key must start with 0x04, got 0x{:02x}",
                bytes[0]
            )));
        }

        let mut key = [0u8; PUBLIC_KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns the serialized key.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Returns the key as lowercase hex (130 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Elliptic-curve capability used to map private keys to public keys.
///
/// Implementations must be pure: the same key always yields the same point.
pub trait Curve: Send + Sync {
    fn derive(&self, key: &PrivateKey) -> Result<PublicKey>;
}

/// [`Curve`] backed by libsecp256k1.
pub struct Secp256k1Curve {
    secp: Secp256k1<All>,
}

impl Secp256k1Curve {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve for Secp256k1Curve {
    /// Computes `key * G` and serializes the point uncompressed.
    fn derive(&self, key: &PrivateKey) -> Result<PublicKey> {
        let secret_key =
            SecretKey::from_slice(key.as_bytes()).map_err(|_| Error::InvalidScalar)?;
        let public_key = secp256k1::PublicKey::from_secret_key(&self.secp, &secret_key);
        Ok(PublicKey(public_key.serialize_uncompressed()))
    }
}
