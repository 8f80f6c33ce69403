use vecstats_result::Error;
use vecstats_types::{ElementKind, GroupScope, STATS_WIDTH, StatsSlot};

use crate::AggregateResult;
use crate::config::StatsConfig;

/// Kind-specific storage for the running cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatsCells {
    Int32([i32; STATS_WIDTH]),
}

/// Running state for one aggregation group.
///
/// Created by the first non-null input of a group, mutated in place by every
/// later fold for that group, and consumed by finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningState {
    scope: GroupScope,
    length: usize,
    kind: ElementKind,
    pub(crate) cells: StatsCells,
    pub(crate) null_flags: [bool; STATS_WIDTH],
}

impl RunningState {
    pub(crate) fn seeded(
        scope: GroupScope,
        kind: ElementKind,
        length: usize,
        config: &StatsConfig,
    ) -> Self {
        let cells = match kind {
            ElementKind::Int32 => {
                let mut cells = [0i32; STATS_WIDTH];
                cells[StatsSlot::MinIndex.index()] = config.min_index_sentinel;
                cells[StatsSlot::MaxIndex.index()] = config.max_index_sentinel;
                StatsCells::Int32(cells)
            }
        };
        Self {
            scope,
            length,
            kind,
            cells,
            null_flags: [false; STATS_WIDTH],
        }
    }

    /// Arity fixed by the first input.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Current value of `slot`, widened to `i64`.
    pub fn value(&self, slot: StatsSlot) -> i64 {
        match &self.cells {
            StatsCells::Int32(cells) => i64::from(cells[slot.index()]),
        }
    }

    /// All cells in slot order, widened to `i64`.
    pub fn values(&self) -> [i64; STATS_WIDTH] {
        StatsSlot::ALL.map(|slot| self.value(slot))
    }

    pub fn is_null(&self, slot: StatsSlot) -> bool {
        self.null_flags[slot.index()]
    }

    pub(crate) fn check_scope(&self, scope: GroupScope, caller: &str) -> AggregateResult<()> {
        if self.scope != scope {
            return Err(Error::ContextError(format!(
                "{caller} received state of group {} while processing group {}",
                self.scope.id(),
                scope.id()
            )));
        }
        Ok(())
    }
}
