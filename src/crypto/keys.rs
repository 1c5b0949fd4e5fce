//! Private key generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{trace, warn};

use crate::error::{Error, Result};

/// Order `n` of the secp256k1 base point, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Number of draws before `generate` gives up on out-of-range scalars.
const MAX_DRAWS: usize = 16;

/// A secp256k1 private key: a scalar in `[1, n-1]`, stored big-endian.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Creates a private key from raw bytes, rejecting 0 and values >= n.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self> {
        if bytes == [0u8; 32] || bytes >= CURVE_ORDER {
            return Err(Error::InvalidScalar);
        }
        Ok(Self(bytes))
    }

    /// Parses a key from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != 64 {
            return Err(Error::InvalidInput(format!(
                "private key must be 64 hex characters, got {}",
                s.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| Error::InvalidInput(format!("private key: {}", e)))?;
        Self::from_bytes(bytes)
    }

    /// Returns the key as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the key as a lowercase hex string (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Draws private keys from a cryptographically secure source.
pub struct KeyGenerator<R> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Creates a generator backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    /// Creates a generator over the given CSPRNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new random private key.
    ///
    /// Draws that land on 0 or at/above the curve order are discarded and
    /// redrawn. A failing entropy source aborts immediately.
    pub fn generate(&mut self) -> Result<PrivateKey> {
        let mut bytes = [0u8; 32];
        for attempt in 1..=MAX_DRAWS {
            self.rng
                .try_fill_bytes(&mut bytes)
                .map_err(Error::EntropyUnavailable)?;

            match PrivateKey::from_bytes(bytes) {
                Ok(key) => {
                    trace!(attempt, "drew private key");
                    return Ok(key);
                }
                Err(_) => warn!(attempt, "drawn scalar out of range, redrawing"),
            }
        }
        Err(Error::InvalidScalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays fixed 32-byte blocks, then repeats the last one.
    struct ScriptedRng {
        blocks: Vec<[u8; 32]>,
        next: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let index = self.next.min(self.blocks.len() - 1);
            dest.copy_from_slice(&self.blocks[index]);
            self.next += 1;
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy device missing"))
        }
    }

    impl CryptoRng for BrokenRng {}

    fn one() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        bytes
    }

    #[test]
    fn test_generate_os_entropy() {
        let mut generator = KeyGenerator::new();
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert_eq!(a.as_bytes().len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let a = KeyGenerator::with_rng(StdRng::seed_from_u64(7)).generate().unwrap();
        let b = KeyGenerator::with_rng(StdRng::seed_from_u64(7)).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_draws_are_redrawn() {
        let rng = ScriptedRng {
            blocks: vec![[0u8; 32], CURVE_ORDER, [0xff; 32], one()],
            next: 0,
        };
        let key = KeyGenerator::with_rng(rng).generate().unwrap();
        assert_eq!(key.as_bytes(), &one());
    }

    #[test]
    fn test_gives_up_after_max_draws() {
        let rng = ScriptedRng {
            blocks: vec![[0u8; 32]],
            next: 0,
        };
        let result = KeyGenerator::with_rng(rng).generate();
        assert!(matches!(result, Err(Error::InvalidScalar)));
    }

    #[test]
    fn test_entropy_failure() {
        let result = KeyGenerator::with_rng(BrokenRng).generate();
        assert!(matches!(result, Err(Error::EntropyUnavailable(_))));
    }

    #[test]
    fn test_scalar_bounds() {
        assert!(PrivateKey::from_bytes([0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(CURVE_ORDER).is_err());
        assert!(PrivateKey::from_bytes(one()).is_ok());

        let mut max = CURVE_ORDER;
        max[31] -= 1;
        assert!(PrivateKey::from_bytes(max).is_ok());
    }

    #[test]
    fn test_hex_parsing() {
        let key = PrivateKey::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(key.as_bytes(), &one());
        assert_eq!(
            key.to_hex(),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );

        let upper = PrivateKey::from_hex(&"AB".repeat(32)).unwrap();
        assert_eq!(upper.to_hex(), "ab".repeat(32));

        assert!(matches!(PrivateKey::from_hex("01"), Err(Error::InvalidInput(_))));
        assert!(matches!(
            PrivateKey::from_hex(&"zz".repeat(32)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            PrivateKey::from_hex(&"00".repeat(32)),
            Err(Error::InvalidScalar)
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = PrivateKey::from_bytes(one()).unwrap();
        assert_eq!(format!("{:?}", key), "PrivateKey(..)");
    }
}
