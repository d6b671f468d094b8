//! Joining provider holidays onto the axis.

use pc_time::HolidayMap;

use crate::table::CalendarTable;

/// Set `holiday_name`/`is_holiday` on every row whose date is in `holidays`.
///
/// Blank names are ignored, so `is_holiday` always equals
/// `holiday_name.is_some()`.
pub fn apply_holidays(mut table: CalendarTable, holidays: &HolidayMap) -> CalendarTable {
    let mut matched = 0usize;
    for row in table.rows_mut() {
        match holidays.get(&row.date) {
            Some(name) if !name.trim().is_empty() => {
                row.holiday_name = Some(name.clone());
                row.is_holiday = true;
                matched += 1;
            }
            _ => {
                row.holiday_name = None;
                row.is_holiday = false;
            }
        }
    }
    tracing::debug!(provided = holidays.len(), matched, "joined holidays");
    table
}
