// Hardware events exposed by the counter facility

use std::fmt;

use hwcount_raw::hw::events;

use crate::event_enum;

event_enum! {
    /// A generalized hardware event, counted in user mode only
    ///
    /// The declaration order is the slot order of [`CounterSet`] and
    /// [`Counts`].
    ///
    /// [`CounterSet`]: crate::counters::CounterSet
    /// [`Counts`]: crate::counters::Counts
    pub enum EventKind {
        Instructions => ("instructions", events::INSTRUCTIONS),
        BranchInstructions => ("branch_instructions", events::BRANCH_INSTRUCTIONS),
        BranchMisses => ("branch_misses", events::BRANCH_MISSES),
        CacheReferences => ("cache_references", events::CACHE_REFERENCES),
        CacheMisses => ("cache_misses", events::CACHE_MISSES),
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
