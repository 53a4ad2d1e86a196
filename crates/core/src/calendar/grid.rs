//! Month grid construction
//!
//! The month view is a fixed 6x7 grid: leading cells from the end of the
//! previous month, one cell per day of the current month, and trailing cells
//! from the next month until the total reaches exactly 42. The grid always
//! starts on a Monday.

use chrono::{Datelike, Days, NaiveDate};
use daybook_domain::constants::GRID_CELL_COUNT;
use daybook_domain::{CalendarDayCell, CalendarViewDay};

/// Format a date as the ISO `YYYY-MM-DD` merge key (local calendar date,
/// no timezone shift).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Build the 42-cell month grid for the month containing `reference`.
pub fn build_month_grid(reference: NaiveDate) -> Vec<CalendarDayCell> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    // Monday = 0 .. Sunday = 6
    let leading = u64::from(first_of_month.weekday().num_days_from_monday());
    let grid_start = first_of_month
        .checked_sub_days(Days::new(leading))
        .unwrap_or(first_of_month);

    grid_start
        .iter_days()
        .take(GRID_CELL_COUNT)
        .map(|date| CalendarDayCell {
            date: date_key(date),
            is_current_month: date.year() == first_of_month.year()
                && date.month() == first_of_month.month(),
            day_number: date.day(),
        })
        .collect()
}

/// Build the grid for the month covered by `days`.
///
/// An empty slice yields an empty grid: the builder never guesses a month.
/// Callers that always want a grid should use [`build_month_grid`] with an
/// explicit reference date instead.
pub fn grid_from_month_data(days: &[CalendarViewDay]) -> Vec<CalendarDayCell> {
    match days.first() {
        Some(first) => build_month_grid(first.date),
        None => Vec::new(),
    }
}

/// Whether `cell` is today's cell.
///
/// `today` is supplied by the caller at evaluation time so the boundary
/// crosses correctly at local midnight; pass `Local::now().date_naive()`.
pub fn is_today(cell: &CalendarDayCell, today: NaiveDate) -> bool {
    cell.date == date_key(today)
}
