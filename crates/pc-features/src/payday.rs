//! Payday engine.
//!
//! The payday of a calendar month is its last business day: the last day
//! that is neither a Saturday, a Sunday nor a holiday. Each payday opens a
//! new pay month, named after the calendar month that follows it, which runs
//! until the next payday. `distance_since_payday` measures how far a day is
//! into its pay month, from 0 on the first day to 1 on the last.

use std::collections::{BTreeMap, BTreeSet};

use pc_time::{Calendar, Date, HolidaySetCalendar};

use crate::table::{CalendarTable, CalendarWarning};

/// Paydays found in a date window, plus the months that have none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaydaySchedule {
    /// Paydays inside the window, ascending.
    pub paydays: Vec<Date>,
    /// `(year, month)` of every month overlapping the window that has no
    /// business day.
    pub empty_months: Vec<(u16, u8)>,
}

/// Compute the payday of every month overlapping `start..=end`.
///
/// Paydays falling outside the window are dropped.
pub fn payday_schedule(start: Date, end: Date, calendar: &dyn Calendar) -> PaydaySchedule {
    let mut schedule = PaydaySchedule::default();
    if start > end {
        return schedule;
    }
    let mut month = start.start_of_month();
    loop {
        match calendar.last_business_day_of_month(month) {
            Some(d) if start <= d && d <= end => schedule.paydays.push(d),
            Some(_) => {}
            None => schedule.empty_months.push((month.year(), month.month())),
        }
        match month.advance_months(1) {
            Ok(next) if next <= end => month = next,
            _ => break,
        }
    }
    schedule
}

/// The paydays in `start..=end` under `calendar`.
pub fn paydays_between(start: Date, end: Date, calendar: &dyn Calendar) -> Vec<Date> {
    payday_schedule(start, end, calendar).paydays
}

fn month_after(date: Date) -> (u16, u8) {
    let (next, new_year) = date.month_of_year().succ_wrapping();
    (date.year() + u16::from(new_year), next.number())
}

/// Fill `is_payday`, `pay_month`, `pay_year` and `distance_since_payday`.
///
/// `holiday_dates` are the non-business days on top of weekends. Months
/// without any business day emit no payday; they are recorded as
/// [`CalendarWarning::EmptyPayMonth`] and their days stay in the pay month
/// opened by the previous payday.
pub fn compute_paydays(mut table: CalendarTable, holiday_dates: &BTreeSet<Date>) -> CalendarTable {
    let (start, end) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return table,
    };
    let calendar = HolidaySetCalendar::new("payday", holiday_dates.iter().copied());
    let schedule = payday_schedule(start, end, &calendar);

    for &(year, month) in &schedule.empty_months {
        tracing::warn!(year, month, "month has no business day; no payday emitted");
        table.push_warning(CalendarWarning::EmptyPayMonth { year, month });
    }

    let paydays: BTreeSet<Date> = schedule.paydays.iter().copied().collect();
    let mut previous: Option<Date> = None;
    for row in table.rows_mut() {
        row.is_payday = paydays.contains(&row.date);
        let (pay_year, pay_month) = match previous {
            Some(p) => month_after(p),
            None => (row.year, row.month),
        };
        row.pay_year = pay_year;
        row.pay_month = pay_month;
        if row.is_payday {
            previous = Some(row.date);
        }
    }

    let mut groups: BTreeMap<(u16, u8), Vec<usize>> = BTreeMap::new();
    for (i, row) in table.rows().iter().enumerate() {
        groups.entry(row.pay_key()).or_default().push(i);
    }
    let rows = table.rows_mut();
    for members in groups.values() {
        let span = members.len().saturating_sub(1);
        for (position, &i) in members.iter().enumerate() {
            rows[i].distance_since_payday = if span == 0 {
                0.0
            } else {
                position as f64 / span as f64
            };
        }
    }

    tracing::debug!(
        paydays = schedule.paydays.len(),
        pay_months = groups.len(),
        "computed paydays"
    );
    table
}
