//! Fail-fast helpers for benchmark binaries
//!
//! A refused counter is not something a micro-benchmark can work around, so
//! these helpers print a diagnostic naming the failing event code and exit
//! the process with `EXIT_FAILURE`. Counters opened before the failure are
//! left to process teardown.

use crate::common::host;
use crate::counters::{Counter, CounterSet, EventKind};
use crate::error::{HwCountError, Result};

pub trait OrExit<T> {
    /// Unwrap the value, or report the error on stderr and exit
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => exit_with(&err),
        }
    }
}

pub fn start_or_exit(kind: EventKind) -> Counter {
    Counter::start(kind).or_exit()
}

pub fn all_start_or_exit() -> CounterSet {
    CounterSet::start().or_exit()
}

fn exit_with(err: &HwCountError) -> ! {
    tracing::error!("{}", err);
    eprintln!("{}", diagnostic(err, host::perf_event_paranoid()));
    std::process::exit(libc::EXIT_FAILURE);
}

/// Render the stderr message for a fatal error
pub fn diagnostic(err: &HwCountError, paranoid: Option<i32>) -> String {
    let mut message = match err {
        HwCountError::SessionRefused {
            kind,
            config,
            source,
        } => format!("Error opening counter {kind} (config 0x{config:x}): {source}"),
        other => match other.config() {
            Some(config) => format!("Error on counter config 0x{config:x}: {other}"),
            None => format!("Error: {other}"),
        },
    };

    if let (HwCountError::SessionRefused { .. }, Some(level)) = (err, paranoid) {
        if level > 2 {
            message.push_str(&format!(
                "\nhint: kernel.perf_event_paranoid is {level}; \
                 user-mode counting needs 2 or lower, or CAP_PERFMON"
            ));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwcount_raw::{IoctlOp, PerfError};

    fn refused() -> HwCountError {
        HwCountError::SessionRefused {
            kind: EventKind::BranchInstructions,
            config: 4,
            source: PerfError::InvalidAttr("test"),
        }
    }

    #[test]
    fn test_diagnostic_names_config_code() {
        let message = diagnostic(&refused(), Some(1));
        assert!(message.starts_with("Error opening counter branch_instructions (config 0x4)"));
        assert!(!message.contains("hint"));
    }

    #[test]
    fn test_diagnostic_paranoid_hint() {
        let message = diagnostic(&refused(), Some(3));
        assert!(message.contains("perf_event_paranoid is 3"));

        let message = diagnostic(&refused(), None);
        assert!(!message.contains("hint"));
    }

    #[test]
    fn test_diagnostic_no_hint_at_level_two() {
        // Level 2 still permits counting our own user-mode execution.
        let message = diagnostic(&refused(), Some(2));
        assert!(!message.contains("hint"));
    }

    #[test]
    fn test_diagnostic_other_errors() {
        let err = HwCountError::Control {
            kind: EventKind::CacheMisses,
            op: IoctlOp::Enable,
            source: PerfError::InvalidAttr("test"),
        };
        assert!(diagnostic(&err, Some(4)).starts_with("Error on counter config 0x3"));

        let err = HwCountError::InvalidConfiguration("cpu -3".to_string());
        assert_eq!(diagnostic(&err, None), "Error: Invalid configuration: cpu -3");
    }
}
