//! The key -> public key -> address pipeline.

use std::fmt;

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::crypto::{Address, Curve, KeyGenerator, PrivateKey, PublicKey, Secp256k1Curve};
use crate::error::Result;

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
    pub address: Address,
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Private key (hex): {}", self.private_key.to_hex())?;
        writeln!(f, "Public key (hex): {}", self.public_key.to_hex())?;
        write!(f, "Address: {}", self.address)
    }
}

/// Runs the derivation stages over an injected [`Curve`].
pub struct Pipeline<C = Secp256k1Curve> {
    curve: C,
}

impl Pipeline<Secp256k1Curve> {
    pub fn new() -> Self {
        Self::with_curve(Secp256k1Curve::new())
    }
}

impl Default for Pipeline<Secp256k1Curve> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Curve> Pipeline<C> {
    pub fn with_curve(curve: C) -> Self {
        Self { curve }
    }

    /// Derives the public key and address for an existing private key.
    pub fn run_with_key(&self, private_key: PrivateKey) -> Result<KeyRecord> {
        let public_key = self.curve.derive(&private_key)?;
        debug!("derived uncompressed public key");

        let address = Address::from_public_key(&public_key);
        debug!(%address, "encoded address");

        Ok(KeyRecord {
            private_key,
            public_key,
            address,
        })
    }

    /// Generates a private key with `generator` and runs the remaining stages.
    pub fn run_with<R: RngCore + CryptoRng>(
        &self,
        generator: &mut KeyGenerator<R>,
    ) -> Result<KeyRecord> {
        let private_key = generator.generate()?;
        self.run_with_key(private_key)
    }

    /// One full run on the operating system's entropy source.
    pub fn run(&self) -> Result<KeyRecord> {
        self.run_with(&mut KeyGenerator::new())
    }
}
