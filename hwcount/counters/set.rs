use crate::config::CounterConfig;
use crate::counters::{Counter, EventKind};
use crate::error::Result;

/// One running counter per [`EventKind`], opened in slot order
#[derive(Debug)]
pub struct CounterSet {
    pub instructions: Counter,
    pub branch_instructions: Counter,
    pub branch_misses: Counter,
    pub cache_references: Counter,
    pub cache_misses: Counter,
}

impl CounterSet {
    pub fn start() -> Result<Self> {
        Self::start_with(&CounterConfig::default())
    }

    /// Open all five counters in slot order
    ///
    /// If one is refused, the counters already opened by this call are
    /// closed before the error is returned.
    pub fn start_with(config: &CounterConfig) -> Result<Self> {
        Ok(Self {
            instructions: Counter::start_with(EventKind::Instructions, config)?,
            branch_instructions: Counter::start_with(EventKind::BranchInstructions, config)?,
            branch_misses: Counter::start_with(EventKind::BranchMisses, config)?,
            cache_references: Counter::start_with(EventKind::CacheReferences, config)?,
            cache_misses: Counter::start_with(EventKind::CacheMisses, config)?,
        })
    }

    /// Read all five counters in slot order
    ///
    /// Every counter is stopped and closed even when an earlier one fails;
    /// the first error is returned.
    pub fn read(self) -> Result<Counts> {
        let instructions = self.instructions.read();
        let branch_instructions = self.branch_instructions.read();
        let branch_misses = self.branch_misses.read();
        let cache_references = self.cache_references.read();
        let cache_misses = self.cache_misses.read();

        Ok(Counts {
            instructions: instructions?,
            branch_instructions: branch_instructions?,
            branch_misses: branch_misses?,
            cache_references: cache_references?,
            cache_misses: cache_misses?,
        })
    }
}

/// Event counts from a [`CounterSet`], in the same slot order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub instructions: i64,
    pub branch_instructions: i64,
    pub branch_misses: i64,
    pub cache_references: i64,
    pub cache_misses: i64,
}

impl Counts {
    pub fn get(&self, kind: EventKind) -> i64 {
        match kind {
            EventKind::Instructions => self.instructions,
            EventKind::BranchInstructions => self.branch_instructions,
            EventKind::BranchMisses => self.branch_misses,
            EventKind::CacheReferences => self.cache_references,
            EventKind::CacheMisses => self.cache_misses,
        }
    }

    pub fn to_array(&self) -> [i64; 5] {
        [
            self.instructions,
            self.branch_instructions,
            self.branch_misses,
            self.cache_references,
            self.cache_misses,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventKind, i64)> + '_ {
        EventKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HwCountError;

    fn sample() -> Counts {
        Counts {
            instructions: 1000,
            branch_instructions: 200,
            branch_misses: 3,
            cache_references: 40,
            cache_misses: 5,
        }
    }

    #[test]
    fn test_counts_slot_order() {
        let counts = sample();
        assert_eq!(counts.to_array(), [1000, 200, 3, 40, 5]);

        let from_iter: Vec<i64> = counts.iter().map(|(_, value)| value).collect();
        assert_eq!(from_iter, counts.to_array().to_vec());

        let kinds: Vec<EventKind> = counts.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, EventKind::all());
    }

    #[test]
    fn test_counts_get() {
        let counts = sample();
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(counts.get(*kind), counts.to_array()[i]);
        }
    }

    #[test]
    fn test_refused_batch_reports_first_slot() {
        let config = CounterConfig::on_cpu(i32::MAX);
        let err = CounterSet::start_with(&config).unwrap_err();

        assert!(matches!(
            err,
            HwCountError::SessionRefused {
                kind: EventKind::Instructions,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_batch_config_rejected() {
        let config = CounterConfig {
            pid: -1,
            cpu: -1,
            ..CounterConfig::default()
        };
        assert!(matches!(
            CounterSet::start_with(&config),
            Err(HwCountError::InvalidConfiguration(_))
        ));
    }
}
