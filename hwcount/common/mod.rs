pub mod host;

pub use host::{available_events, perf_event_paranoid, PERF_EVENT_PARANOID};
