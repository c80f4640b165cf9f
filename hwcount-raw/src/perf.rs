//! perf_event session primitives
//!
//! This module provides the syscall, ioctl and read calls behind a counting
//! session. Each function maps to exactly one kernel call; ordering them into
//! a start/read lifecycle is left to the caller.

use std::fmt;
use std::os::fd::{AsRawFd, BorrowedFd, FromRawFd, OwnedFd, RawFd};

use nix::errno::Errno;
use perf_event_open_sys::{bindings, ioctls};

use crate::attr::EventAttr;

pub type Result<T> = std::result::Result<T, PerfError>;

/// Errors that can occur during perf_event operations
#[derive(Debug, thiserror::Error)]
pub enum PerfError {
    #[error("perf_event_open failed for type {event_type} config 0x{config:X}: {source}")]
    OpenFailed {
        event_type: u32,
        config: u64,
        source: nix::Error,
    },

    #[error("PERF_EVENT_IOC_{op} failed on fd {fd}: {source}")]
    IoctlFailed {
        op: IoctlOp,
        fd: RawFd,
        source: nix::Error,
    },

    #[error("Failed to read count from fd {fd}: {source}")]
    ReadFailed { fd: RawFd, source: nix::Error },

    #[error("Short read from fd {fd}: got {len} of 8 bytes")]
    ShortRead { fd: RawFd, len: usize },

    #[error("Invalid event attr: {0}")]
    InvalidAttr(&'static str),
}

/// Which task and CPU a session counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// 0 for the calling thread, -1 for every task (needs a concrete `cpu`)
    pub pid: libc::pid_t,

    /// -1 for whichever CPU the task runs on
    pub cpu: libc::c_int,
}

impl Default for Target {
    fn default() -> Self {
        Self { pid: 0, cpu: -1 }
    }
}

/// Session control requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoctlOp {
    Reset,
    Enable,
    Disable,
}

impl fmt::Display for IoctlOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoctlOp::Reset => "RESET",
            IoctlOp::Enable => "ENABLE",
            IoctlOp::Disable => "DISABLE",
        };
        f.write_str(name)
    }
}

/// Open a standalone counting session (no group leader)
///
/// # Errors
///
/// Returns an error if:
/// - The attr fails [`EventAttr::validate`]
/// - The kernel refuses the session (event unsupported on this CPU,
///   `perf_event_paranoid` too strict, no free counters, seccomp)
pub fn open(attr: &EventAttr, target: Target) -> Result<OwnedFd> {
    attr.validate().map_err(PerfError::InvalidAttr)?;

    let mut raw = attr.to_raw();
    let group_fd = -1;
    let flags = bindings::PERF_FLAG_FD_CLOEXEC as libc::c_ulong;

    let fd = Errno::result(unsafe {
        perf_event_open_sys::perf_event_open(&mut raw, target.pid, target.cpu, group_fd, flags)
    })
    .map_err(|source| PerfError::OpenFailed {
        event_type: attr.event_type,
        config: attr.config,
        source,
    })?;

    tracing::trace!(
        "perf_event_open: type {} config 0x{:x} pid {} cpu {} -> fd {}",
        attr.event_type,
        attr.config,
        target.pid,
        target.cpu,
        fd
    );

    // SAFETY: the kernel just handed us this descriptor and nothing else owns it.
    Ok(unsafe { OwnedFd::from_raw_fd(fd) })
}

/// Issue one control ioctl against a session
pub fn control(fd: BorrowedFd<'_>, op: IoctlOp) -> Result<()> {
    let raw = fd.as_raw_fd();

    // SAFETY: `raw` is a live descriptor for the duration of the borrow.
    let ret = unsafe {
        match op {
            IoctlOp::Reset => ioctls::RESET(raw, 0),
            IoctlOp::Enable => ioctls::ENABLE(raw, 0),
            IoctlOp::Disable => ioctls::DISABLE(raw, 0),
        }
    };

    Errno::result(ret).map_err(|source| PerfError::IoctlFailed {
        op,
        fd: raw,
        source,
    })?;

    tracing::trace!("PERF_EVENT_IOC_{} on fd {}", op, raw);
    Ok(())
}

/// Read the current 64-bit count of a session
pub fn read_count(fd: BorrowedFd<'_>) -> Result<i64> {
    let raw = fd.as_raw_fd();
    let mut buffer = [0u8; 8];

    let len = nix::unistd::read(raw, &mut buffer)
        .map_err(|source| PerfError::ReadFailed { fd: raw, source })?;

    if len != buffer.len() {
        return Err(PerfError::ShortRead { fd: raw, len });
    }

    Ok(i64::from_ne_bytes(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::events;
    use std::io::Write;
    use std::os::fd::AsFd;
    use std::os::unix::net::UnixStream;

    #[test]
    fn test_perf_error_display() {
        let err = PerfError::OpenFailed {
            event_type: 0,
            config: events::CACHE_MISSES,
            source: Errno::EACCES,
        };
        assert!(err.to_string().contains("config 0x3"));

        let err = PerfError::IoctlFailed {
            op: IoctlOp::Disable,
            fd: 7,
            source: Errno::ENOTTY,
        };
        assert!(err.to_string().starts_with("PERF_EVENT_IOC_DISABLE failed on fd 7"));
    }

    #[test]
    fn test_open_rejects_invalid_attr() {
        let attr = EventAttr::hardware(events::MAX + 1);
        let result = open(&attr, Target::default());
        assert!(matches!(result, Err(PerfError::InvalidAttr(_))));
    }

    #[test]
    fn test_open_rejects_missing_cpu() {
        let attr = EventAttr::hardware(events::INSTRUCTIONS);
        let target = Target {
            pid: 0,
            cpu: libc::c_int::MAX,
        };
        let result = open(&attr, target);
        assert!(matches!(result, Err(PerfError::OpenFailed { config: 1, .. })));
    }

    #[test]
    fn test_read_count_native_endian() {
        let (mut writer, reader) = UnixStream::pair().unwrap();
        writer.write_all(&12345i64.to_ne_bytes()).unwrap();

        assert_eq!(read_count(reader.as_fd()).unwrap(), 12345);
    }

    #[test]
    fn test_read_count_short() {
        let (mut writer, reader) = UnixStream::pair().unwrap();
        writer.write_all(&[1, 2, 3, 4]).unwrap();
        drop(writer);

        let result = read_count(reader.as_fd());
        assert!(matches!(result, Err(PerfError::ShortRead { len: 4, .. })));
    }

    #[test]
    fn test_control_on_non_perf_fd() {
        let (_writer, reader) = UnixStream::pair().unwrap();

        let result = control(reader.as_fd(), IoctlOp::Reset);
        assert!(matches!(
            result,
            Err(PerfError::IoctlFailed {
                op: IoctlOp::Reset,
                ..
            })
        ));
    }
}
