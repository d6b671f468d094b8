//! Date axis: one neutral row per calendar day.

use pc_core::errors::{Error, Result};
use pc_time::Date;

use crate::table::{CalendarRow, CalendarTable};

/// Build one row per day in `start..=end`.
///
/// Only the date-part columns are filled in; every other column is neutral
/// (see [`CalendarRow::new`]).
///
/// # Errors
/// [`Error::InvalidRange`] if `start > end`.
pub fn build_axis(start: Date, end: Date) -> Result<CalendarTable> {
    if start > end {
        return Err(Error::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let rows: Vec<CalendarRow> = Date::range_inclusive(start, end)
        .map(CalendarRow::new)
        .collect();
    tracing::debug!(%start, %end, rows = rows.len(), "built date axis");
    Ok(CalendarTable::from_rows(rows))
}
