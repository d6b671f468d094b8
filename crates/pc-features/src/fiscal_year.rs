//! Fiscal-year labels.
//!
//! A fiscal year starting in month `s` is labelled by the two-digit suffixes
//! of the calendar years it spans: with `s = 4`, January 2022 belongs to
//! `2122` and April 2022 to `2223`.

use pc_core::errors::{Error, Result};

use crate::table::CalendarTable;

fn check_month(month: u8) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidMonth { month })
    }
}

/// The fiscal-year label of `year`/`month` for a fiscal year beginning in
/// `fy_start_month`.
///
/// Suffixes are taken modulo 100, so 2099-04 with an April start gives `9900`.
///
/// # Errors
/// [`Error::InvalidMonth`] if `month` or `fy_start_month` is outside 1..=12.
pub fn fiscal_year_label(year: u16, month: u8, fy_start_month: u8) -> Result<u16> {
    check_month(month)?;
    check_month(fy_start_month)?;
    let first = if month < fy_start_month {
        year.wrapping_sub(1)
    } else {
        year
    };
    let second = first.wrapping_add(1);
    Ok((first % 100) * 100 + second % 100)
}

/// Fill `fiscal_year` on every row.
pub fn assign_fiscal_years(mut table: CalendarTable, fy_start_month: u8) -> Result<CalendarTable> {
    check_month(fy_start_month)?;
    for row in table.rows_mut() {
        row.fiscal_year = fiscal_year_label(row.year, row.month, fy_start_month)?;
    }
    Ok(table)
}
