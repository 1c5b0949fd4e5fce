//! # btc_address
//!
//! Legacy Bitcoin key and address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, public key derivation and address encoding
//! - `encoding`: Base58 / Base58Check
//! - `pipeline`: The key -> public key -> address run
//! - `worker`: Parallel batches of independent runs
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod pipeline;
pub mod worker;

pub use config::Config;
pub use crypto::{
    encode_address, Address, Curve, KeyGenerator, PrivateKey, PublicKey, Secp256k1Curve,
};
pub use error::{Error, Result};
pub use pipeline::{KeyRecord, Pipeline};
pub use worker::WorkerPool;
