use vecstats_result::Error;

use crate::AggregateResult;

/// Environment variable overriding [`StatsConfig::min_index_sentinel`].
pub const MIN_INDEX_SENTINEL_ENV: &str = "VECSTATS_MIN_INDEX_SENTINEL";
/// Environment variable overriding [`StatsConfig::max_index_sentinel`].
pub const MAX_INDEX_SENTINEL_ENV: &str = "VECSTATS_MAX_INDEX_SENTINEL";

/// Seed for the min-index slot. Upstream indices are expected to stay below it.
pub const DEFAULT_MIN_INDEX_SENTINEL: i32 = 50_000;
/// Seed for the max-index slot. Upstream indices are never negative.
pub const DEFAULT_MAX_INDEX_SENTINEL: i32 = -1;

/// Seeds used when a running state is first created.
///
/// The min-index slot starts above every legitimate index and the max-index
/// slot below every legitimate index, so the first contributing row always
/// replaces both. If a group contributes no row, the sentinels are what
/// finalization reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub min_index_sentinel: i32,
    pub max_index_sentinel: i32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_index_sentinel: DEFAULT_MIN_INDEX_SENTINEL,
            max_index_sentinel: DEFAULT_MAX_INDEX_SENTINEL,
        }
    }
}

impl StatsConfig {
    /// Seeds at the extremes of the 32-bit range, for indices that may exceed
    /// the default bound.
    pub fn full_range() -> Self {
        Self {
            min_index_sentinel: i32::MAX,
            max_index_sentinel: i32::MIN,
        }
    }

    /// Read overrides from the process environment, falling back to defaults.
    pub fn from_env() -> AggregateResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> AggregateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(MIN_INDEX_SENTINEL_ENV) {
            config.min_index_sentinel = parse_sentinel(MIN_INDEX_SENTINEL_ENV, &raw)?;
        }
        if let Some(raw) = lookup(MAX_INDEX_SENTINEL_ENV) {
            config.max_index_sentinel = parse_sentinel(MAX_INDEX_SENTINEL_ENV, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// The min seed must lie strictly above the max seed.
    pub fn validate(&self) -> AggregateResult<()> {
        if self.min_index_sentinel <= self.max_index_sentinel {
            return Err(Error::InvalidArgumentError(format!(
                "min-index sentinel ({}) must be greater than max-index sentinel ({})",
                self.min_index_sentinel, self.max_index_sentinel
            )));
        }
        Ok(())
    }
}

fn parse_sentinel(key: &str, raw: &str) -> AggregateResult<i32> {
    raw.trim().parse::<i32>().map_err(|e| {
        Error::InvalidArgumentError(format!("{key} must be a 32-bit integer, got '{raw}': {e}"))
    })
}
