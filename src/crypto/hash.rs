//! Hash primitives used by legacy addresses.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of arbitrary bytes.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// HASH160 = RIPEMD-160(SHA-256(data)).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}

/// Base58Check checksum: the first 4 bytes of `double_sha256(data)`.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = double_sha256(data);
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}
