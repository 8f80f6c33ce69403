//! vecstats: incremental statistics over fixed-shape integer vectors.
//!
//! This crate is the entrypoint for the workspace. It re-exports the
//! aggregate, its configuration and the host-facing vector types from the
//! underlying `vecstats-*` crates.
//!
//! # Quick Start
//!
//! Fold rows of a group, then finalize:
//!
//! ```rust
//! use std::sync::Arc;
//! use arrow::array::{ArrayRef, Int32Array};
//! use vecstats::{CallContext, HostVector, VecToStats};
//!
//! let agg = VecToStats::default();
//! let ctx = CallContext::aggregate(0);
//!
//! let a: ArrayRef = Arc::new(Int32Array::from(vec![2, 10, 1, 1]));
//! let b: ArrayRef = Arc::new(Int32Array::from(vec![3, 2, 7, 1]));
//!
//! let state = agg.fold(&ctx, None, Some(HostVector::from(&a))).unwrap();
//! let state = agg.fold(&ctx, state, Some(HostVector::from(&b))).unwrap();
//! let out = agg.finalize(&ctx, state).unwrap().unwrap();
//!
//! assert_eq!((out.sum(), out.min_index(), out.max_index(), out.count()),
//!            (Some(5), Some(2), Some(7), Some(2)));
//! ```
//!
//! # Architecture
//!
//! - **Errors** (`vecstats-result`): the unified [`Error`] type.
//! - **Types** (`vecstats-types`): element kinds, vector views, call context.
//! - **Aggregate** (`vecstats-aggregate`): [`VecToStats`], [`RunningState`],
//!   [`StatsConfig`] and the grouped [`VecStatsStream`].

pub use vecstats_aggregate::{
    AggregateResult, RunningState, StatsConfig, VecStatsStream, VecToStats, config, stream,
};
pub use vecstats_result::{Error, Result};
pub use vecstats_types::{
    CallContext, ElementKind, GroupScope, HostVector, OUTPUT_LOWER_BOUND, OutputVector,
    STATS_WIDTH, StatsSlot,
};
