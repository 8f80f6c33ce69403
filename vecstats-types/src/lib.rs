//! Shared types for the vecstats aggregate.
//!
//! - [`ElementKind`]: the closed set of numeric kinds the accumulator handles.
//! - [`HostVector`] / [`OutputVector`]: the Arrow-backed vector views exchanged
//!   with the host.
//! - [`CallContext`] / [`GroupScope`]: where a call came from, and which group
//!   owns a running state.
//! - [`StatsSlot`]: the fixed positional meaning of a statistics vector.

pub mod context;
pub mod kind;
pub mod vector;

pub use context::{CallContext, GroupScope};
pub use kind::ElementKind;
pub use vector::{HostVector, OutputVector};

/// Number of positional slots in a statistics vector.
pub const STATS_WIDTH: usize = 4;

/// Lower bound reported for finalized vectors.
pub const OUTPUT_LOWER_BOUND: i32 = 1;

/// Positional slots of a statistics vector, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsSlot {
    Sum,
    MinIndex,
    MaxIndex,
    Count,
}

impl StatsSlot {
    pub const ALL: [StatsSlot; STATS_WIDTH] = [
        StatsSlot::Sum,
        StatsSlot::MinIndex,
        StatsSlot::MaxIndex,
        StatsSlot::Count,
    ];

    /// Zero-based storage index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            StatsSlot::Sum => 0,
            StatsSlot::MinIndex => 1,
            StatsSlot::MaxIndex => 2,
            StatsSlot::Count => 3,
        }
    }
}
