// Test fixtures - reusable test data

use chrono::{NaiveDate, NaiveTime};

/// Sample dates for booking tests. 2024-03-04 is a Monday.
pub mod dates {
    use super::*;

    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    pub fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// The business day just before [`monday`].
    pub fn previous_friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }
}

/// Slots from the default availability list.
pub mod times {
    use super::*;

    pub fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    pub fn fourteen() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 0, 0).unwrap()
    }
}
