//! Environment-driven configuration. Kept in its own test binary with a
//! single test so no other thread touches the process environment.

use vecstats_aggregate::config::{
    DEFAULT_MAX_INDEX_SENTINEL, MAX_INDEX_SENTINEL_ENV, MIN_INDEX_SENTINEL_ENV,
};
use vecstats_aggregate::{StatsConfig, VecToStats};
use vecstats_result::Error;
use vecstats_test_utils::{int4_values, int4_vector};
use vecstats_types::{CallContext, HostVector, StatsSlot};

#[test]
fn sentinels_follow_environment() {
    // SAFETY: this binary runs one test, so nothing reads the environment concurrently.
    unsafe {
        std::env::remove_var(MIN_INDEX_SENTINEL_ENV);
        std::env::remove_var(MAX_INDEX_SENTINEL_ENV);
    }
    assert_eq!(StatsConfig::from_env().unwrap(), StatsConfig::default());

    unsafe {
        std::env::set_var(MIN_INDEX_SENTINEL_ENV, "123456");
    }
    let config = StatsConfig::from_env().unwrap();
    assert_eq!(config.min_index_sentinel, 123_456);
    assert_eq!(config.max_index_sentinel, DEFAULT_MAX_INDEX_SENTINEL);

    // A skipped first row leaves the configured seeds in place.
    let agg = VecToStats::from_env().unwrap();
    let ctx = CallContext::aggregate(0);
    let skipped = int4_vector(&[None, Some(1), Some(2), Some(3)]);
    let state = agg
        .fold(&ctx, None, Some(HostVector::from(&skipped)))
        .unwrap()
        .unwrap();
    assert_eq!(state.value(StatsSlot::MinIndex), 123_456);

    let row = int4_values(&[1, 100_000, 100_001, 1]);
    let state = agg
        .fold(&ctx, Some(state), Some(HostVector::from(&row)))
        .unwrap()
        .unwrap();
    assert_eq!(state.value(StatsSlot::MinIndex), 100_000);

    unsafe {
        std::env::set_var(MIN_INDEX_SENTINEL_ENV, "not a number");
    }
    assert!(matches!(
        StatsConfig::from_env(),
        Err(Error::InvalidArgumentError(ref msg)) if msg.contains(MIN_INDEX_SENTINEL_ENV)
    ));
    assert!(matches!(
        VecToStats::from_env(),
        Err(Error::InvalidArgumentError(_))
    ));

    unsafe {
        std::env::remove_var(MIN_INDEX_SENTINEL_ENV);
    }
}
