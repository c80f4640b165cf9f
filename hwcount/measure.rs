//! Scoped measurement: start, run a closure, read

use crate::counters::{Counter, CounterSet, Counts, EventKind};
use crate::error::Result;

/// Count `kind` events while `f` runs
pub fn measure<R>(kind: EventKind, f: impl FnOnce() -> R) -> Result<(R, i64)> {
    let counter = Counter::start(kind)?;
    let result = f();
    let count = counter.read()?;
    Ok((result, count))
}

/// Count all five events while `f` runs
pub fn measure_all<R>(f: impl FnOnce() -> R) -> Result<(R, Counts)> {
    let counters = CounterSet::start()?;
    let result = f();
    let counts = counters.read()?;
    Ok((result, counts))
}
