//! Typed `perf_event_attr` layout
//!
//! The kernel struct is a large C struct with a 64-bit bitfield word. Only a
//! handful of its fields matter for plain counting, so [`EventAttr`] models
//! those and leaves everything else zeroed (no sampling, no grouping, no
//! read_format extras, which keeps a read at exactly 8 bytes).
//!
//! ## Bitfield Format (first word of flags)
//!
//! | Bit | Field          | Description                          |
//! |-----|----------------|--------------------------------------|
//! | 0   | disabled       | Start the session switched off       |
//! | 1   | inherit        | Children inherit the counter         |
//! | 2   | pinned         | Must always be on the PMU            |
//! | 3   | exclusive      | Only group on the PMU                |
//! | 4   | exclude_user   | Do not count user mode               |
//! | 5   | exclude_kernel | Do not count kernel mode             |
//! | 6   | exclude_hv     | Do not count hypervisor mode         |
//! | 7   | exclude_idle   | Do not count when idle               |

use std::mem;

use perf_event_open_sys::bindings::perf_event_attr;

use crate::hw::{self, PERF_TYPE_HARDWARE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventAttr {
    /// `perf_event_attr.type`
    pub event_type: u32,

    /// `perf_event_attr.config`, meaning depends on `event_type`
    pub config: u64,

    pub disabled: bool,
    pub inherit: bool,
    pub pinned: bool,
    pub exclude_user: bool,
    pub exclude_kernel: bool,
    pub exclude_hv: bool,
    pub exclude_idle: bool,
}

impl EventAttr {
    /// A user-mode-only hardware counter, created disabled
    pub fn hardware(config: u64) -> Self {
        Self {
            event_type: PERF_TYPE_HARDWARE,
            config,
            disabled: true,
            exclude_kernel: true,
            exclude_hv: true,
            ..Default::default()
        }
    }

    /// Build the kernel struct, with `size` set to the layout these
    /// bindings were generated from
    pub fn to_raw(&self) -> perf_event_attr {
        let mut attr = perf_event_attr {
            size: mem::size_of::<perf_event_attr>() as u32,
            type_: self.event_type,
            config: self.config,
            ..Default::default()
        };

        attr.set_disabled(self.disabled as u64);
        attr.set_inherit(self.inherit as u64);
        attr.set_pinned(self.pinned as u64);
        attr.set_exclude_user(self.exclude_user as u64);
        attr.set_exclude_kernel(self.exclude_kernel as u64);
        attr.set_exclude_hv(self.exclude_hv as u64);
        attr.set_exclude_idle(self.exclude_idle as u64);

        attr
    }

    pub fn from_raw(attr: &perf_event_attr) -> Self {
        Self {
            event_type: attr.type_,
            config: attr.config,
            disabled: attr.disabled() != 0,
            inherit: attr.inherit() != 0,
            pinned: attr.pinned() != 0,
            exclude_user: attr.exclude_user() != 0,
            exclude_kernel: attr.exclude_kernel() != 0,
            exclude_hv: attr.exclude_hv() != 0,
            exclude_idle: attr.exclude_idle() != 0,
        }
    }

    /// Reject attrs the kernel would accept but that can never count anything
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.exclude_user && self.exclude_kernel && self.exclude_hv {
            return Err("attr excludes user, kernel and hypervisor mode");
        }

        if self.event_type == PERF_TYPE_HARDWARE && self.config >= hw::events::MAX {
            return Err("unknown generalized hardware event");
        }

        Ok(())
    }
}
