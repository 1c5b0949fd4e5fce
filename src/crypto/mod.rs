//! Cryptographic operations for legacy Bitcoin key and address generation.
//!
//! This module provides:
//! - Secure random private key generation
//! - Public key derivation on secp256k1
//! - HASH160 / double-SHA-256 primitives
//! - Legacy address encoding and validation

mod address;
mod curve;
pub mod hash;
mod keys;

pub use address::{encode_address, Address, AddressError, MAINNET_VERSION};
pub use curve::{Curve, PublicKey, Secp256k1Curve, PUBLIC_KEY_LEN};
pub use keys::{KeyGenerator, PrivateKey, CURVE_ORDER};
