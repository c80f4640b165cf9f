use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd};

use hwcount_raw::{perf, IoctlOp};

use crate::config::CounterConfig;
use crate::counters::EventKind;
use crate::error::{HwCountError, Result};

/// A running hardware counter for one [`EventKind`]
///
/// Returned already reset and enabled. [`Counter::read`] consumes the handle,
/// so a session is read at most once. Dropping an unread counter closes the
/// session without retrieving its count.
#[derive(Debug)]
pub struct Counter {
    kind: EventKind,
    fd: OwnedFd,
    finished: bool,
}

impl Counter {
    pub fn start(kind: EventKind) -> Result<Self> {
        Self::start_with(kind, &CounterConfig::default())
    }

    pub fn start_with(kind: EventKind, config: &CounterConfig) -> Result<Self> {
        config.validate()?;

        let fd = perf::open(&config.attr(kind), config.target()).map_err(|source| {
            HwCountError::SessionRefused {
                kind,
                config: kind.config(),
                source,
            }
        })?;

        // Sessions are created disabled; zero them before counting starts.
        control(kind, fd.as_fd(), IoctlOp::Reset)?;
        control(kind, fd.as_fd(), IoctlOp::Enable)?;

        tracing::debug!("Started {} counter on fd {}", kind, fd.as_raw_fd());

        Ok(Self {
            kind,
            fd,
            finished: false,
        })
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Stop counting and return the number of events since start
    ///
    /// The session is closed on return, including on error.
    pub fn read(mut self) -> Result<i64> {
        self.finished = true;
        let kind = self.kind;
        let fd = self.fd.as_fd();

        control(kind, fd, IoctlOp::Disable)?;

        let count =
            perf::read_count(fd).map_err(|source| HwCountError::Read { kind, source })?;

        tracing::debug!("Read {} counter on fd {}: {}", kind, fd.as_raw_fd(), count);

        Ok(count)
    }
}

impl Drop for Counter {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!(
                "{} counter on fd {} closed without being read",
                self.kind,
                self.fd.as_raw_fd()
            );
        }
    }
}

fn control(kind: EventKind, fd: BorrowedFd<'_>, op: IoctlOp) -> Result<()> {
    perf::control(fd, op).map_err(|source| HwCountError::Control { kind, op, source })
}
