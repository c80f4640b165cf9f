use hwcount_raw::{EventAttr, Target};

use crate::counters::EventKind;
use crate::error::{HwCountError, Result};

/// Scope of a counting session
///
/// The default counts the calling thread on whichever CPU it runs, in user
/// mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// 0 for the calling thread, a positive pid for another task, -1 for all
    pub pid: i32,
    /// -1 for any CPU
    pub cpu: i32,
    pub exclude_kernel: bool,
    pub exclude_hv: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            pid: 0,
            cpu: -1,
            exclude_kernel: true,
            exclude_hv: true,
        }
    }
}

impl CounterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the calling thread only while it runs on `cpu`
    pub fn on_cpu(cpu: i32) -> Self {
        Self {
            cpu,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pid < -1 {
            return Err(HwCountError::InvalidConfiguration(format!(
                "pid must be -1, 0 or a task id, got {}",
                self.pid
            )));
        }

        if self.cpu < -1 {
            return Err(HwCountError::InvalidConfiguration(format!(
                "cpu must be -1 or a CPU id, got {}",
                self.cpu
            )));
        }

        if self.pid == -1 && self.cpu == -1 {
            return Err(HwCountError::InvalidConfiguration(
                "counting every task requires a concrete cpu".to_string(),
            ));
        }

        Ok(())
    }

    pub(crate) fn attr(&self, kind: EventKind) -> EventAttr {
        EventAttr {
            exclude_kernel: self.exclude_kernel,
            exclude_hv: self.exclude_hv,
            ..EventAttr::hardware(kind.config())
        }
    }

    pub(crate) fn target(&self) -> Target {
        Target {
            pid: self.pid,
            cpu: self.cpu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope() {
        let config = CounterConfig::default();
        assert_eq!(config.target(), Target::default());
        assert!(config.validate().is_ok());

        let attr = config.attr(EventKind::BranchInstructions);
        assert_eq!(attr, EventAttr::hardware(4));
        assert!(attr.disabled);
        assert!(attr.exclude_kernel);
        assert!(attr.exclude_hv);
        assert!(!attr.exclude_user);
    }

    #[test]
    fn test_on_cpu() {
        let config = CounterConfig::on_cpu(2);
        assert_eq!(config.target(), Target { pid: 0, cpu: 2 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scope() {
        let configs = [
            CounterConfig {
                pid: -2,
                ..CounterConfig::default()
            },
            CounterConfig::on_cpu(-5),
            CounterConfig {
                pid: -1,
                cpu: -1,
                ..CounterConfig::default()
            },
        ];

        for config in configs {
            assert!(matches!(
                config.validate(),
                Err(HwCountError::InvalidConfiguration(_))
            ));
        }
    }
}
