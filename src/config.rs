//! Runtime configuration for the address generator.

use clap::Parser;

/// Legacy Bitcoin Address Generator
///
/// With no arguments, generates one random private key and prints it with its
/// uncompressed public key and legacy (P2PKH) address.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Derive from this private key (64 hex characters) instead of generating one
    #[arg(short = 'k', long, conflicts_with = "count")]
    pub private_key: Option<String>,

    /// Number of addresses to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long, default_value = "false")]
    pub verbose: bool,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }

        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers);
        }

        if let Some(ref key) = self.private_key {
            if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::InvalidPrivateKey(
                    "Private key must be exactly 64 hex characters".into(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Count must be at least 1")]
    InvalidCount,

    #[error("Worker count must be at least 1")]
    InvalidWorkers,

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}
