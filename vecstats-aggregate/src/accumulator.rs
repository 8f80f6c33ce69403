use arrow::array::{Array, Int32Array};
use vecstats_result::Error;
use vecstats_types::{CallContext, ElementKind, GroupScope, HostVector, STATS_WIDTH, StatsSlot};

use crate::AggregateResult;
use crate::config::StatsConfig;
use crate::state::{RunningState, StatsCells};

pub(crate) const TRANSITION_NAME: &str = "vec_to_stats_transfn";

/// The `vec_to_stats` aggregate.
///
/// Each input row is a four-slot vector produced by an upstream stage,
/// read positionally as (sum, min-index, max-index, count). Folding keeps a
/// running total of the sums and counts, the smallest min-index and the
/// largest max-index seen in the group.
#[derive(Debug, Clone, Default)]
pub struct VecToStats {
    config: StatsConfig,
}

impl VecToStats {
    /// Create the aggregate with explicit sentinel seeds.
    pub fn new(config: StatsConfig) -> AggregateResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create the aggregate with sentinels read from the process environment.
    /// See [`StatsConfig::from_env`].
    pub fn from_env() -> AggregateResult<Self> {
        Self::new(StatsConfig::from_env()?)
    }

    /// Fold one input row into the running state of its group.
    ///
    /// A null input leaves `state` untouched, including a state that has not
    /// been created yet. The first non-null input creates the state; every
    /// input must then agree with it on kind, shape and length. A row whose
    /// first cell is null is skipped as a whole.
    ///
    /// The running sum and count are checked: a group whose totals leave the
    /// element kind's range fails with [`Error::Overflow`] and aborts, rather
    /// than wrapping.
    pub fn fold(
        &self,
        ctx: &CallContext,
        state: Option<RunningState>,
        input: Option<HostVector<'_>>,
    ) -> AggregateResult<Option<RunningState>> {
        let scope = ctx.group_scope(TRANSITION_NAME)?;
        if let Some(state) = &state {
            state.check_scope(scope, TRANSITION_NAME)?;
        }

        let Some(input) = input else {
            return Ok(state);
        };

        let mut state = match state {
            Some(state) => {
                check_kind_and_shape(&state, &input)?;
                state
            }
            None => self.initialize(scope, &input)?,
        };

        if input.len() != state.length() {
            return Err(Error::length_mismatch(state.length(), input.len()));
        }

        if input.is_null(StatsSlot::Sum.index()) {
            tracing::trace!(group = scope.id(), "vec_to_stats skipped row with null leading cell");
            return Ok(Some(state));
        }

        fold_row(&mut state, &input)?;
        Ok(Some(state))
    }

    fn initialize(&self, scope: GroupScope, input: &HostVector<'_>) -> AggregateResult<RunningState> {
        let kind = input.element_kind().ok_or_else(|| {
            let supported: Vec<&str> = ElementKind::SUPPORTED
                .iter()
                .map(|kind| kind.sql_name())
                .collect();
            Error::TypeError(format!(
                "vec_to_stats input must be array of {}, got {}",
                supported.join(" or "),
                input.element_type()
            ))
        })?;
        if input.ndim() != 1 {
            return Err(Error::ShapeError(format!(
                "one-dimensional arrays are required, got {} dimensions",
                input.ndim()
            )));
        }
        if input.len() != STATS_WIDTH {
            return Err(Error::LengthError(format!(
                "vec_to_stats input length must be {STATS_WIDTH}, got {}",
                input.len()
            )));
        }

        tracing::trace!(
            group = scope.id(),
            kind = %kind,
            min_seed = self.config.min_index_sentinel,
            max_seed = self.config.max_index_sentinel,
            "vec_to_stats initialized state"
        );
        Ok(RunningState::seeded(scope, kind, input.len(), &self.config))
    }
}

fn check_kind_and_shape(state: &RunningState, input: &HostVector<'_>) -> AggregateResult<()> {
    if input.element_kind() != Some(state.kind()) {
        return Err(Error::TypeError(format!(
            "vec_to_stats input must be array of {}, got {}",
            state.kind(),
            input.element_type()
        )));
    }
    if input.ndim() != 1 {
        return Err(Error::ShapeError(format!(
            "one-dimensional arrays are required, got {} dimensions",
            input.ndim()
        )));
    }
    Ok(())
}

/// Merge every slot of a non-skipped row into the running cells.
///
/// Null cells past the leading one read as zero, which is what the host
/// hands out for a null element.
fn fold_row(state: &mut RunningState, input: &HostVector<'_>) -> AggregateResult<()> {
    match &mut state.cells {
        StatsCells::Int32(cells) => {
            let values = input
                .values()
                .as_any()
                .downcast_ref::<Int32Array>()
                .ok_or_else(|| Error::unsupported_kind(input.values().data_type()))?;
            let cell = |slot: StatsSlot| {
                let idx = slot.index();
                if values.is_null(idx) { 0 } else { values.value(idx) }
            };

            let sum = StatsSlot::Sum.index();
            cells[sum] = cells[sum].checked_add(cell(StatsSlot::Sum)).ok_or_else(|| {
                Error::Overflow("vec_to_stats sum exceeds INTEGER range".into())
            })?;

            let min = StatsSlot::MinIndex.index();
            cells[min] = cells[min].min(cell(StatsSlot::MinIndex));

            let max = StatsSlot::MaxIndex.index();
            cells[max] = cells[max].max(cell(StatsSlot::MaxIndex));

            let count = StatsSlot::Count.index();
            cells[count] = cells[count].checked_add(cell(StatsSlot::Count)).ok_or_else(|| {
                Error::Overflow("vec_to_stats count exceeds INTEGER range".into())
            })?;
        }
    }
    state.null_flags[StatsSlot::Sum.index()] = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecstats_test_utils::{int4_values, int4_vector};

    fn fold_all(agg: &VecToStats, rows: &[[i32; 4]]) -> RunningState {
        let ctx = CallContext::aggregate(0);
        let mut state = None;
        for row in rows {
            let input = int4_values(row);
            state = agg.fold(&ctx, state, Some(HostVector::from(&input))).unwrap();
        }
        state.expect("at least one row")
    }

    #[test]
    fn first_row_overwrites_sentinels() {
        let state = fold_all(&VecToStats::default(), &[[5, 3, 3, 1]]);
        assert_eq!(state.values(), [5, 3, 3, 1]);
    }

    #[test]
    fn indices_beyond_default_sentinel_need_full_range() {
        let rows = [[1, 60_000, 70_000, 1]];
        let state = fold_all(&VecToStats::default(), &rows);
        assert_eq!(state.value(StatsSlot::MinIndex), 50_000);

        let wide = VecToStats::new(StatsConfig::full_range()).unwrap();
        let state = fold_all(&wide, &rows);
        assert_eq!(state.value(StatsSlot::MinIndex), 60_000);
        assert_eq!(state.value(StatsSlot::MaxIndex), 70_000);
    }

    #[test]
    fn null_trailing_cells_read_as_zero() {
        let agg = VecToStats::default();
        let ctx = CallContext::aggregate(0);
        let input = int4_vector(&[Some(4), Some(9), None, None]);
        let state = agg
            .fold(&ctx, None, Some(HostVector::from(&input)))
            .unwrap()
            .unwrap();
        assert_eq!(state.values(), [4, 9, 0, 0]);
    }

    #[test]
    fn sum_overflow_is_reported() {
        let agg = VecToStats::default();
        let ctx = CallContext::aggregate(0);
        let big = int4_values(&[i32::MAX, 0, 0, 1]);
        let state = agg.fold(&ctx, None, Some(HostVector::from(&big))).unwrap();
        let err = agg
            .fold(&ctx, state, Some(HostVector::from(&big)))
            .unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    fn count_overflow_aborts_instead_of_wrapping() {
        let agg = VecToStats::default();
        let ctx = CallContext::aggregate(0);
        let heavy = int4_values(&[0, 1, 1, i32::MAX - 1]);
        let one = int4_values(&[0, 1, 1, 1]);
        let state = agg.fold(&ctx, None, Some(HostVector::from(&heavy))).unwrap();
        let state = agg.fold(&ctx, state, Some(HostVector::from(&one))).unwrap();
        assert_eq!(state.as_ref().unwrap().value(StatsSlot::Count), i64::from(i32::MAX));

        let err = agg
            .fold(&ctx, state, Some(HostVector::from(&one)))
            .unwrap_err();
        assert!(matches!(err, Error::Overflow(msg) if msg.contains("count")));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = StatsConfig {
            min_index_sentinel: 0,
            max_index_sentinel: 0,
        };
        assert!(matches!(
            VecToStats::new(config),
            Err(Error::InvalidArgumentError(_))
        ));
    }
}
