//! Generalized hardware event ids
//!
//! The kernel translates these into each CPU vendor's own PMU encodings, so
//! the same config value counts retired instructions on Intel, AMD and ARM.
//!
//! ## References
//!
//! - `include/uapi/linux/perf_event.h`, `enum perf_type_id` and `enum perf_hw_id`
//! - perf_event_open(2)

use perf_event_open_sys::bindings;

/// `perf_event_attr.type` for generalized hardware events
pub const PERF_TYPE_HARDWARE: u32 = bindings::PERF_TYPE_HARDWARE;

/// `perf_event_attr.config` values for `PERF_TYPE_HARDWARE`
pub mod events {
    use super::bindings;

    pub const CPU_CYCLES: u64 = bindings::PERF_COUNT_HW_CPU_CYCLES as u64;
    pub const INSTRUCTIONS: u64 = bindings::PERF_COUNT_HW_INSTRUCTIONS as u64;
    pub const CACHE_REFERENCES: u64 = bindings::PERF_COUNT_HW_CACHE_REFERENCES as u64;
    pub const CACHE_MISSES: u64 = bindings::PERF_COUNT_HW_CACHE_MISSES as u64;
    pub const BRANCH_INSTRUCTIONS: u64 = bindings::PERF_COUNT_HW_BRANCH_INSTRUCTIONS as u64;
    pub const BRANCH_MISSES: u64 = bindings::PERF_COUNT_HW_BRANCH_MISSES as u64;
    pub const BUS_CYCLES: u64 = bindings::PERF_COUNT_HW_BUS_CYCLES as u64;

    /// One past the highest hardware event id the bindings know about
    pub const MAX: u64 = bindings::PERF_COUNT_HW_MAX as u64;
}

/// Kernel name of a generalized hardware event, as `perf list` prints it
pub fn event_name(config: u64) -> Option<&'static str> {
    let name = match config {
        events::CPU_CYCLES => "cpu-cycles",
        events::INSTRUCTIONS => "instructions",
        events::CACHE_REFERENCES => "cache-references",
        events::CACHE_MISSES => "cache-misses",
        events::BRANCH_INSTRUCTIONS => "branch-instructions",
        events::BRANCH_MISSES => "branch-misses",
        events::BUS_CYCLES => "bus-cycles",
        _ => return None,
    };
    Some(name)
}
