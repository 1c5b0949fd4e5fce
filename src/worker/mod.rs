//! Worker pool for generating many addresses in parallel.
//!
//! Every run is independent: each worker owns its entropy handle and shares
//! only the read-only [`Pipeline`](crate::Pipeline).

mod pool;

pub use pool::WorkerPool;
