// Booking widget state machine.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::utils::date::{month_start, shift_month};

/// Fixed availability: bookable weekdays plus the slot list offered on each
/// of them. There is no reservation backend, so slots are never marked taken.
#[derive(Debug, Clone)]
pub struct AvailabilityRules {
    pub weekdays: Vec<Weekday>,
    pub slots: Vec<NaiveTime>,
}

impl Default for AvailabilityRules {
    fn default() -> Self {
        let slots = [(9, 0), (10, 0), (11, 0), (14, 0), (15, 0), (16, 0), (17, 0)]
            .iter()
            .map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0).expect("valid slot time"))
            .collect();
        Self {
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            slots,
        }
    }
}

impl AvailabilityRules {
    /// A day is bookable iff it falls on an open weekday and is not before
    /// `today`. Comparison is at day granularity.
    pub fn is_bookable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday()) && date >= today
    }
}

/// User-driven transitions of the booking widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    PreviousMonth,
    NextMonth,
    SelectDay(NaiveDate),
    SelectTime(NaiveTime),
    ClearSelection,
}

/// View state of the booking widget. `month` is pinned to the first of the
/// displayed month; every transition goes through [`BookingState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingState {
    pub month: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<NaiveTime>,
}

impl BookingState {
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            month: month_start(today),
            selected_date: None,
            selected_time: None,
        }
    }

    /// The hand-off needs both a date and a time.
    pub fn can_confirm(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    /// Reducer over widget actions. Selecting an unavailable day leaves the
    /// state unchanged; selecting any day drops a previously chosen time.
    pub fn apply(self, action: BookingAction, rules: &AvailabilityRules, today: NaiveDate) -> Self {
        match action {
            BookingAction::PreviousMonth => Self {
                month: shift_month(self.month, -1),
                ..self
            },
            BookingAction::NextMonth => Self {
                month: shift_month(self.month, 1),
                ..self
            },
            BookingAction::SelectDay(date) => {
                if rules.is_bookable(date, today) {
                    Self {
                        selected_date: Some(date),
                        selected_time: None,
                        ..self
                    }
                } else {
                    self
                }
            }
            BookingAction::SelectTime(time) => Self {
                selected_time: Some(time),
                ..self
            },
            BookingAction::ClearSelection => Self {
                selected_date: None,
                selected_time: None,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn weekends_are_closed_by_default() {
        let rules = AvailabilityRules::default();
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(!rules.is_bookable(saturday, monday()));
        assert!(!rules.is_bookable(sunday, monday()));
    }

    #[test]
    fn past_days_are_closed_at_day_granularity() {
        let rules = AvailabilityRules::default();
        let previous_friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(!rules.is_bookable(previous_friday, monday()));
        assert!(rules.is_bookable(monday(), monday()));
    }

    #[test]
    fn seven_slots_every_open_day() {
        let rules = AvailabilityRules::default();
        assert_eq!(rules.slots.len(), 7);
        assert_eq!(rules.slots[0], NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(rules.slots[6], NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn starting_state_shows_the_current_month_unselected() {
        let state = BookingState::starting_at(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(state.month, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(state.selected_date.is_none());
        assert!(state.selected_time.is_none());
    }

    #[test]
    fn selecting_a_closed_day_is_a_no_op() {
        let rules = AvailabilityRules::default();
        let state = BookingState::starting_at(monday());
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            state.apply(BookingAction::SelectDay(sunday), &rules, monday()),
            state
        );
    }
}
