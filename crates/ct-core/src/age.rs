//! Elapsed-age calculation for tested cylinders
//!
//! Two display regimes with a sharp cutover: tests two or more calendar days
//! after casting show a bare day count; younger tests show the precise
//! duration since batching started.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Age-of-test display string.
///
/// Returns an empty string when the test has not been performed. At two or
/// more calendar days between cast and test (date-only subtraction), returns
/// the day count alone, ignoring time-of-day on both ends. Below that,
/// returns `"{d}d {h}:{mm}"` built from the signed duration between
/// `casting_date + batching_start_time` (midnight when absent) and the
/// testing instant.
///
/// The calendar-day check runs first: a pair two calendar days apart but
/// under 48 elapsed hours (cast 23:00, tested 01:00 two days on) still gets
/// the coarse count.
pub fn age_of_test(
    casting_date: NaiveDate,
    batching_start_time: Option<NaiveTime>,
    testing_date: Option<NaiveDateTime>,
) -> String {
    let Some(tested) = testing_date else {
        return String::new();
    };

    let days_difference = (tested.date() - casting_date).num_days();
    if days_difference >= 2 {
        return days_difference.to_string();
    }

    let start = casting_date.and_time(batching_start_time.unwrap_or(NaiveTime::MIN));
    let elapsed = tested - start;

    let days = elapsed.num_days();
    let hours = elapsed.num_hours() - days * 24;
    let minutes = elapsed.num_minutes() - elapsed.num_hours() * 60;

    format!("{}d {}:{:02}", days, hours, minutes)
}

#[cfg(test)]
#[path = "age_test.rs"]
mod tests;
