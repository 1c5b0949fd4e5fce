//! Worker pool management.

use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::crypto::{Curve, KeyGenerator};
use crate::error::{Error, Result};
use crate::pipeline::{KeyRecord, Pipeline};

/// A fixed-size pool of threads running pipeline batches.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// Dedicated rayon pool, kept apart from the global one
    pool: ThreadPool,
}

impl WorkerPool {
    /// Creates a pool with the specified number of workers.
    pub fn new(num_workers: usize) -> Result<Self> {
        if num_workers == 0 {
            return Err(Error::WorkerPool("worker count must be at least 1".into()));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|id| format!("keygen-worker-{}", id))
            .build()
            .map_err(|e| Error::WorkerPool(e.to_string()))?;

        Ok(Self { num_workers, pool })
    }

    /// Runs `count` independent pipelines and returns their records in order.
    ///
    /// The first failing run aborts the whole batch.
    pub fn generate<C: Curve>(
        &self,
        pipeline: &Pipeline<C>,
        count: usize,
    ) -> Result<Vec<KeyRecord>> {
        let start = Instant::now();

        let records = self.pool.install(|| {
            (0..count)
                .into_par_iter()
                .map_init(KeyGenerator::new, |generator, _| pipeline.run_with(generator))
                .collect::<Result<Vec<_>>>()
        })?;

        let elapsed = start.elapsed();
        debug!(
            count,
            workers = self.num_workers,
            elapsed_ms = elapsed.as_millis() as u64,
            "batch complete"
        );

        Ok(records)
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}
