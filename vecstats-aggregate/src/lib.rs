//! Incremental statistics over fixed-shape integer vectors.
//!
//! An upstream stage emits, per row, a vector `(sum, min_index, max_index,
//! count)`. [`VecToStats`] folds those rows into a per-group [`RunningState`]
//! and finalizes it into an [`OutputVector`](vecstats_types::OutputVector) of
//! the same shape: summed sums, the smallest min-index, the largest max-index
//! and summed counts.
//!
//! [`VecStatsStream`] runs the aggregate over Arrow record batches, keeping one
//! running state per group.

use vecstats_result::Error;

pub mod accumulator;
pub mod config;
mod finalize;
pub mod state;
pub mod stream;

pub use accumulator::VecToStats;
pub use config::StatsConfig;
pub use state::RunningState;
pub use stream::VecStatsStream;

pub type AggregateResult<T> = Result<T, Error>;
