use chrono::{Local, NaiveDate};

/// Source of "today" for every date-relative rule.
pub trait Clock: Clone + std::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date read from the OS clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Clock selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for ReferenceClock {
    fn today(&self) -> NaiveDate {
        match self {
            ReferenceClock::System(clock) => clock.today(),
            ReferenceClock::Fixed(clock) => clock.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
        assert_eq!(ReferenceClock::Fixed(FixedClock(date)).today(), date);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = ReferenceClock::System(SystemClock).today();
        let after = Local::now().date_naive();
        assert!(today >= before && today <= after);
    }
}
