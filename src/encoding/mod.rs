//! Text encodings for key material and addresses.

pub mod base58;

pub use base58::Base58Error;
