//! Request-scoped "today" derivation
//!
//! "Today" is read exactly once per pipeline run, in the configured time
//! zone, and then passed around as a plain value. Classification and
//! sorting never touch the wall clock themselves, so a run with a fixed
//! clock is fully deterministic.

use crate::types::CanonicalDate;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// The reference date for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestClock {
    today: CanonicalDate,
}

impl RequestClock {
    /// Read the clock once and derive today's date in the given zone
    pub fn for_zone(zone: Tz) -> Self {
        let today = Utc::now().with_timezone(&zone).date_naive();
        debug!("Reference date for this run: {} (zone: {})", today, zone);
        Self { today: CanonicalDate::from_naive(today) }
    }

    /// Use a fixed reference date instead of the clock
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today: CanonicalDate::from_naive(today) }
    }

    /// The reference date in canonical form
    pub fn today(&self) -> &CanonicalDate {
        &self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = RequestClock::fixed(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(clock.today().as_str(), "2024-06-15");
    }

    #[test]
    fn test_zone_clock_produces_canonical_form() {
        let clock = RequestClock::for_zone(chrono_tz::Europe::Paris);
        assert_eq!(clock.today().as_str().len(), 10);
        assert!(CanonicalDate::parse(clock.today().as_str()).is_some());
    }
}
