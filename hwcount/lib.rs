//! # hwcount
//!
//! Exact hardware event counts for a bracketed region of code, using the
//! Linux perf_events interface.
//!
//! Five generalized events are supported: retired instructions, branch
//! instructions, branch misses, cache references and cache misses. Each
//! counter counts the calling thread in user mode only.
//!
//! ```no_run
//! use hwcount::{all_read, all_start};
//!
//! let counters = all_start()?;
//! // measured region
//! let counts = all_read(counters)?;
//! println!("{} instructions, {} branch misses", counts.instructions, counts.branch_misses);
//! # Ok::<(), hwcount::HwCountError>(())
//! ```

// Macros (must be first for visibility)
#[macro_use]
pub mod macros;

pub mod common;
pub mod config;
pub mod counters;
pub mod error;
pub mod fatal;
pub mod measure;

pub use config::CounterConfig;
pub use counters::{
    all_read, all_start, branch_miss_start, branch_start, cache_miss_start,
    cache_reference_start, count_read, instruction_start, Counter, CounterSet, Counts, EventKind,
};
pub use error::{HwCountError, Result};
pub use fatal::{all_start_or_exit, start_or_exit, OrExit};
pub use measure::{measure, measure_all};
