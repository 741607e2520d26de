//! Business hours and the clock they are checked against.

use chrono::{Local, NaiveDateTime, Timelike};

/// Whether the shop is open at `current_hour`. Both bounds are inclusive.
pub fn is_open(current_hour: u32, open_hour: u32, close_hour: u32) -> bool {
    open_hour <= current_hour && current_hour <= close_hour
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_hour: 12,
            close_hour: 22,
        }
    }
}

impl BusinessHours {
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self { open_hour, close_hour }
    }

    pub fn is_open_at(&self, hour: u32) -> bool {
        is_open(hour, self.open_hour, self.close_hour)
    }

    pub fn is_open(&self, clock: &dyn Clock) -> bool {
        self.is_open_at(clock.current_hour())
    }
}

/// Source of wall-clock time, injected so the gate and order timestamps
/// stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn current_hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
pub use test_clock::FixedClock;

#[cfg(test)]
mod test_clock {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::Clock;

    /// Clock stuck at a single instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        now: NaiveDateTime,
    }

    impl FixedClock {
        pub fn at(now: NaiveDateTime) -> Self {
            Self { now }
        }

        /// 18 Oct 2026 at `hour`:30:00.
        pub fn at_hour(hour: u32) -> Self {
            let now = NaiveDate::from_ymd_opt(2026, 10, 18)
                .and_then(|d| d.and_hms_opt(hour, 30, 0))
                .expect("valid test timestamp");
            Self::at(now)
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.now
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(is_open(12, 12, 22));
        assert!(is_open(22, 12, 22));
        assert!(!is_open(11, 12, 22));
        assert!(!is_open(23, 12, 22));
    }

    #[test]
    fn test_open_hours_form_one_contiguous_run() {
        let hours = BusinessHours::default();
        let open: Vec<u32> = (0..24).filter(|h| hours.is_open_at(*h)).collect();
        assert_eq!(open, (12..=22).collect::<Vec<_>>());
    }

    #[test]
    fn test_is_open_reads_injected_clock() {
        let hours = BusinessHours::new(12, 22);
        assert!(hours.is_open(&FixedClock::at_hour(13)));
        assert!(!hours.is_open(&FixedClock::at_hour(9)));
    }
}
