use hwcount_raw::{IoctlOp, PerfError};
use thiserror::Error;

use crate::counters::EventKind;

#[derive(Error, Debug)]
pub enum HwCountError {
    #[error("Failed to open {kind} counter: {source}")]
    SessionRefused {
        kind: EventKind,
        config: u64,
        source: PerfError,
    },

    #[error("Failed to control {kind} counter: {source}")]
    Control {
        kind: EventKind,
        op: IoctlOp,
        source: PerfError,
    },

    #[error("Failed to read {kind} counter: {source}")]
    Read { kind: EventKind, source: PerfError },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl HwCountError {
    /// The event whose session failed, if the error is tied to one
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            HwCountError::SessionRefused { kind, .. }
            | HwCountError::Control { kind, .. }
            | HwCountError::Read { kind, .. } => Some(*kind),
            HwCountError::InvalidConfiguration(_) => None,
        }
    }

    /// The `perf_event_attr.config` code of the failing event
    pub fn config(&self) -> Option<u64> {
        match self {
            HwCountError::SessionRefused { config, .. } => Some(*config),
            other => other.kind().map(|kind| kind.config()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HwCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn refused(kind: EventKind) -> HwCountError {
        HwCountError::SessionRefused {
            kind,
            config: kind.config(),
            source: PerfError::InvalidAttr("test"),
        }
    }

    #[test]
    fn test_error_accessors() {
        let err = refused(EventKind::BranchMisses);
        assert_eq!(err.kind(), Some(EventKind::BranchMisses));
        assert_eq!(err.config(), Some(5));

        let err = HwCountError::Read {
            kind: EventKind::CacheMisses,
            source: PerfError::ShortRead { fd: 3, len: 0 },
        };
        assert_eq!(err.config(), Some(3));

        let err = HwCountError::InvalidConfiguration("cpu -2".to_string());
        assert_eq!(err.kind(), None);
        assert_eq!(err.config(), None);
    }

    #[test]
    fn test_error_display() {
        let err = refused(EventKind::Instructions);
        assert_eq!(
            err.to_string(),
            "Failed to open instructions counter: Invalid event attr: test"
        );
    }
}
