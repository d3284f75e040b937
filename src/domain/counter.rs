//! Count of consecutive successful runs.

/// Starts at zero and only ever grows by one per successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounter(u64);

impl RunCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Record a successful run and return the new count
    pub fn record_success(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 1-based index of the run after the ones already counted
    pub fn next_run(&self) -> u64 {
        self.0 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = RunCounter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.next_run(), 1);
        assert_eq!(counter, RunCounter::default());
    }

    #[test]
    fn test_record_success_increments_by_one() {
        let mut counter = RunCounter::new();
        assert_eq!(counter.record_success(), 1);
        assert_eq!(counter.record_success(), 2);
        assert_eq!(counter.record_success(), 3);
        assert_eq!(counter.next_run(), 4);
    }
}
