use vecstats_result::{Error, Result};

/// Identity of one aggregation group.
///
/// A running state is created inside exactly one group scope and is only valid
/// for calls made under that same scope. The host ends the scope by
/// finalizing, after which the state is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupScope {
    id: u64,
}

impl GroupScope {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// How the host invoked an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallContext {
    /// Called by the aggregation machinery on behalf of a group.
    Aggregate(GroupScope),
    /// Called as a plain function, outside any aggregation.
    Scalar,
}

impl CallContext {
    /// Shorthand for `CallContext::Aggregate(GroupScope::new(group_id))`.
    pub fn aggregate(group_id: u64) -> Self {
        CallContext::Aggregate(GroupScope::new(group_id))
    }

    /// Return the group scope, or a context error naming `caller` when the
    /// call did not come from an aggregation.
    pub fn group_scope(&self, caller: &str) -> Result<GroupScope> {
        match self {
            CallContext::Aggregate(scope) => Ok(*scope),
            CallContext::Scalar => Err(Error::ContextError(format!(
                "{caller} called in non-aggregate context"
            ))),
        }
    }
}
