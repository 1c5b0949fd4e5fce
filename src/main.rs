//! Legacy Bitcoin Address Generator CLI
//!
//! Usage:
//!   btc_address                  # One random key, public key and address
//!   btc_address -k <64 hex>      # Derive from an existing private key
//!   btc_address -n 10 -w 4       # Ten independent addresses on four workers

use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use btc_address::{Config, KeyRecord, Pipeline, PrivateKey, WorkerPool};

fn main() {
    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    init_logging(config.verbose);

    match run(&config) {
        Ok(records) => print_records(&records),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

/// Runs every requested pipeline before anything is printed.
fn run(config: &Config) -> btc_address::Result<Vec<KeyRecord>> {
    let pipeline = Pipeline::new();

    if let Some(ref hex_key) = config.private_key {
        let private_key = PrivateKey::from_hex(hex_key)?;
        return Ok(vec![pipeline.run_with_key(private_key)?]);
    }

    if config.count == 1 {
        return Ok(vec![pipeline.run()?]);
    }

    let pool = WorkerPool::new(config.worker_count())?;
    pool.generate(&pipeline, config.count)
}

fn print_records(records: &[KeyRecord]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", record);
    }
}
