//! Process-wide instance counting.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Number of `Counter` values ever constructed in this process
static INSTANCES: AtomicU64 = AtomicU64::new(0);

/// A value whose construction is counted for the lifetime of the process.
///
/// The count only ever grows; dropping a `Counter` does not decrement it.
#[derive(Debug)]
pub struct Counter {
    serial: u64,
}

impl Counter {
    pub fn new() -> Self {
        let serial = INSTANCES.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(serial, "counter constructed");
        Counter { serial }
    }

    /// Total constructions so far
    pub fn instances() -> u64 {
        INSTANCES.load(Ordering::Acquire)
    }

    /// 1-based construction number of this value
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // The only test in this crate's unit tests that constructs counters, so
    // the deltas below are exact.
    #[test]
    fn test_instances_grow_by_one_per_construction() {
        let before = Counter::instances();
        let a = Counter::new();
        assert_eq!(Counter::instances(), before + 1);
        let b = Counter::new();
        assert_eq!(Counter::instances(), before + 2);
        assert!(b.serial() > a.serial());

        drop(a);
        assert_eq!(Counter::instances(), before + 2);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        let _ = Counter::new();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(Counter::instances(), before + 402);
    }
}
