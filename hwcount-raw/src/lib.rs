//! # hwcount-raw
//!
//! Linux `perf_event_open(2)` definitions for counting hardware events in
//! user mode.
//!
//! This crate covers the kernel side of a counting session: the typed
//! `perf_event_attr` layout, the generalized hardware event ids, the syscall
//! that opens a session, the control ioctls and the 8-byte count read.
//! Session lifetimes and event naming live in the `hwcount` crate.
//!
//! ## Usage
//!
//! ```ignore
//! use hwcount_raw::{control, hw, open, read_count, EventAttr, IoctlOp, Target};
//! use std::os::fd::AsFd;
//!
//! let attr = EventAttr::hardware(hw::events::INSTRUCTIONS);
//! let fd = open(&attr, Target::default())?;
//!
//! control(fd.as_fd(), IoctlOp::Reset)?;
//! control(fd.as_fd(), IoctlOp::Enable)?;
//! // measured region
//! control(fd.as_fd(), IoctlOp::Disable)?;
//!
//! let count = read_count(fd.as_fd())?;
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("hwcount-raw requires the Linux perf_events subsystem");

pub mod attr;
pub mod hw;
pub mod perf;

pub use attr::EventAttr;
pub use perf::{control, open, read_count, IoctlOp, PerfError, Result, Target};
