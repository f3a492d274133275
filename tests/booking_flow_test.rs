// Integration tests for the booking state machine and hand-off URL
use booking_calendar::models::booking::{AvailabilityRules, BookingAction, BookingState};
use booking_calendar::services::booking::booking_url;
use chrono::{Datelike, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use test_case::test_case;

mod fixtures;

use fixtures::{dates, times};

fn widget() -> (BookingState, AvailabilityRules, NaiveDate) {
    let today = dates::monday();
    (
        BookingState::starting_at(today),
        AvailabilityRules::default(),
        today,
    )
}

#[test]
fn selecting_an_available_day_sets_the_date() {
    let (state, rules, today) = widget();
    let state = state.apply(BookingAction::SelectDay(dates::tuesday()), &rules, today);
    assert_eq!(state.selected_date, Some(dates::tuesday()));
    assert_eq!(state.selected_time, None);
}

#[test]
fn selecting_today_is_allowed() {
    let (state, rules, today) = widget();
    let state = state.apply(BookingAction::SelectDay(today), &rules, today);
    assert_eq!(state.selected_date, Some(today));
}

#[test_case(dates::previous_friday(); "past weekday")]
#[test_case(dates::saturday(); "saturday")]
#[test_case(dates::sunday(); "sunday")]
fn unavailable_days_leave_the_selection_unchanged(day: NaiveDate) {
    let (state, rules, today) = widget();
    let after = state.apply(BookingAction::SelectDay(day), &rules, today);
    assert_eq!(after, state);
}

#[test]
fn selecting_a_day_clears_the_previous_time() {
    let (state, rules, today) = widget();
    let state = state
        .apply(BookingAction::SelectDay(dates::tuesday()), &rules, today)
        .apply(BookingAction::SelectTime(times::nine()), &rules, today);
    assert_eq!(state.selected_time, Some(times::nine()));

    let state = state.apply(BookingAction::SelectDay(dates::monday()), &rules, today);
    assert_eq!(state.selected_date, Some(dates::monday()));
    assert_eq!(state.selected_time, None);

    // Re-selecting the same day clears the time as well.
    let state = state
        .apply(BookingAction::SelectTime(times::fourteen()), &rules, today)
        .apply(BookingAction::SelectDay(dates::monday()), &rules, today);
    assert_eq!(state.selected_time, None);
}

#[test]
fn confirm_requires_both_selections() {
    let (state, rules, today) = widget();
    assert!(!state.can_confirm());

    let with_date = state.apply(BookingAction::SelectDay(dates::tuesday()), &rules, today);
    assert!(!with_date.can_confirm());

    let with_both = with_date.apply(BookingAction::SelectTime(times::nine()), &rules, today);
    assert!(with_both.can_confirm());

    // Picking a new date drops the time and disables confirmation again.
    let reselected = with_both.apply(BookingAction::SelectDay(dates::monday()), &rules, today);
    assert!(!reselected.can_confirm());
}

#[test]
fn hand_off_url_carries_the_iso_date() {
    assert!(booking_url(dates::tuesday()).ends_with("?date=2024-03-05"));
}

#[test]
fn hand_off_url_zero_pads_month_and_day() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
    assert!(booking_url(date).ends_with("?date=2025-01-07"));
}

#[test]
fn clearing_the_selection_resets_both_fields() {
    let (state, rules, today) = widget();
    let state = state
        .apply(BookingAction::SelectDay(dates::tuesday()), &rules, today)
        .apply(BookingAction::SelectTime(times::nine()), &rules, today)
        .apply(BookingAction::ClearSelection, &rules, today);
    assert_eq!(state.selected_date, None);
    assert_eq!(state.selected_time, None);
    // The displayed month is untouched by the reset.
    assert_eq!(state.month, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn month_navigation_round_trips_and_keeps_the_selection() {
    let (state, rules, today) = widget();
    let state = state
        .apply(BookingAction::SelectDay(dates::tuesday()), &rules, today)
        .apply(BookingAction::SelectTime(times::nine()), &rules, today);
    let original_month = state.month;

    let moved = state.apply(BookingAction::NextMonth, &rules, today);
    assert_eq!(moved.month, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    assert_eq!(moved.selected_date, state.selected_date);
    assert_eq!(moved.selected_time, state.selected_time);

    let back = moved.apply(BookingAction::PreviousMonth, &rules, today);
    assert_eq!(back.month, original_month);
    assert_eq!(back.selected_date, state.selected_date);
    assert_eq!(back.selected_time, state.selected_time);
}

#[test]
fn weekends_stay_closed_even_in_the_future() {
    let (_, rules, today) = widget();
    let future_saturday = NaiveDate::from_ymd_opt(2024, 4, 6).unwrap();
    assert_eq!(future_saturday.weekday(), Weekday::Sat);
    assert!(!rules.is_bookable(future_saturday, today));
}
