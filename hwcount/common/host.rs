// Host capability probing

use once_cell::sync::Lazy;

use crate::counters::{Counter, EventKind};

const PARANOID_PATH: &str = "/proc/sys/kernel/perf_event_paranoid";

/// `kernel.perf_event_paranoid`, read once per process
pub static PERF_EVENT_PARANOID: Lazy<Option<i32>> = Lazy::new(|| {
    let level = std::fs::read_to_string(PARANOID_PATH)
        .ok()
        .and_then(|s| parse_paranoid(&s));

    match level {
        Some(level) => tracing::debug!("perf_event_paranoid = {}", level),
        None => tracing::debug!("Could not read {}", PARANOID_PATH),
    }

    level
});

pub fn perf_event_paranoid() -> Option<i32> {
    *PERF_EVENT_PARANOID
}

fn parse_paranoid(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}

/// Event kinds whose sessions this process can open right now
///
/// Each kind is opened and read once, so the result reflects privileges,
/// PMU support and free counters at the time of the call.
pub fn available_events() -> Vec<EventKind> {
    EventKind::ALL
        .iter()
        .copied()
        .filter(|&kind| match Counter::start(kind).and_then(Counter::read) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("{} counter unavailable: {}", kind, e);
                false
            }
        })
        .collect()
}
