//! The counter facility: single-event handles and the five-event batch
//!
//! The free functions here are the flat entry points for callers that only
//! bracket a region:
//!
//! ```no_run
//! let counter = hwcount::instruction_start()?;
//! let mut acc = 0u64;
//! for i in 0..1000 {
//!     acc = std::hint::black_box(acc + i);
//! }
//! let instructions = hwcount::count_read(counter)?;
//! # Ok::<(), hwcount::HwCountError>(())
//! ```

pub mod counter;
pub mod events;
pub mod set;

pub use counter::Counter;
pub use events::EventKind;
pub use set::{CounterSet, Counts};

use crate::error::Result;

pub fn instruction_start() -> Result<Counter> {
    Counter::start(EventKind::Instructions)
}

pub fn branch_start() -> Result<Counter> {
    Counter::start(EventKind::BranchInstructions)
}

pub fn branch_miss_start() -> Result<Counter> {
    Counter::start(EventKind::BranchMisses)
}

pub fn cache_reference_start() -> Result<Counter> {
    Counter::start(EventKind::CacheReferences)
}

pub fn cache_miss_start() -> Result<Counter> {
    Counter::start(EventKind::CacheMisses)
}

/// Stop a counter and return its count, consuming the handle
pub fn count_read(counter: Counter) -> Result<i64> {
    counter.read()
}

pub fn all_start() -> Result<CounterSet> {
    CounterSet::start()
}

pub fn all_read(counters: CounterSet) -> Result<Counts> {
    counters.read()
}
