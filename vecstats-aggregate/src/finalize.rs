use vecstats_types::{CallContext, OUTPUT_LOWER_BOUND, OutputVector};

use crate::AggregateResult;
use crate::accumulator::VecToStats;
use crate::state::RunningState;

const FINAL_NAME: &str = "vec_to_stats_finalfn";

impl VecToStats {
    /// Turn the running state of a group into its output vector.
    ///
    /// A group that never saw a non-null input has no state and produces no
    /// vector. Consuming the state makes this the last operation on it.
    pub fn finalize(
        &self,
        ctx: &CallContext,
        state: Option<RunningState>,
    ) -> AggregateResult<Option<OutputVector>> {
        let scope = ctx.group_scope(FINAL_NAME)?;
        let Some(state) = state else {
            tracing::debug!(group = scope.id(), "vec_to_stats finalized empty group");
            return Ok(None);
        };
        state.check_scope(scope, FINAL_NAME)?;

        let length = state.length();
        let output = OutputVector::from_parts(
            state.kind(),
            &state.values()[..length],
            &state.null_flags[..length],
            OUTPUT_LOWER_BOUND,
        )?;
        tracing::debug!(group = scope.id(), kind = %state.kind(), "vec_to_stats finalized group");
        Ok(Some(output))
    }
}
