// Date helpers shared by the month grid and navigation.

use chrono::{Datelike, NaiveDate};

/// First day of the month `date` falls in.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Shifts a month anchor by `delta` months, landing on the first of the
/// resulting month.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let total = (month.year() * 12) + (month.month() as i32 - 1) + delta;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid calendar month")
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

/// Blank cells before day 1 in a Sunday-first month grid.
pub fn leading_blanks(month: NaiveDate) -> u32 {
    month_start(month).weekday().num_days_from_sunday()
}
