//! `CalendarRow` and `CalendarTable`: the enriched daily calendar.

use std::ops::Range;

use pc_core::Real;
use pc_time::{Date, Month};

/// A commercially significant recurring day that is not a public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialDay {
    /// The day after the fourth Thursday of November.
    BlackFriday,
    /// The first Monday after Black Friday.
    CyberMonday,
    /// The Saturday and Sunday following Black Friday.
    BlackWeekend,
    /// December 24–31, on days that are not holidays.
    ChristmasShopping,
    /// The day after Easter Sunday; carries the provider's Easter Sunday name.
    DayAfterEaster(String),
}

impl std::fmt::Display for SpecialDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialDay::BlackFriday => f.write_str("Black Friday"),
            SpecialDay::CyberMonday => f.write_str("Cyber Monday"),
            SpecialDay::BlackWeekend => f.write_str("Black Weekend"),
            SpecialDay::ChristmasShopping => f.write_str("Christmas Shopping"),
            SpecialDay::DayAfterEaster(label) => write!(f, "Day after {label}"),
        }
    }
}

/// One calendar day and its features.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarRow {
    /// The calendar date.
    pub date: Date,
    /// Calendar year.
    pub year: u16,
    /// Quarter (1–4).
    pub quarter: u8,
    /// Month (1–12).
    pub month: u8,
    /// ISO-8601 week number (1–53).
    pub iso_week: u8,
    /// ISO weekday (1 = Monday … 7 = Sunday).
    pub weekday: u8,
    /// Day of the month (1–31).
    pub day: u8,
    /// Fiscal year label, e.g. `2223` for April 2022 with an April start.
    pub fiscal_year: u16,
    /// Holiday name, if the date is a holiday.
    pub holiday_name: Option<String>,
    /// `true` iff `holiday_name` is set.
    pub is_holiday: bool,
    /// `true` on the last business day of the calendar month.
    pub is_payday: bool,
    /// Pay-month bucket (1–12).
    pub pay_month: u8,
    /// Year of the pay-month bucket.
    pub pay_year: u16,
    /// Position within the pay-month bucket: 0 on its first day, 1 on its last.
    pub distance_since_payday: Real,
    /// Special-day marker.
    pub special_day: Option<SpecialDay>,
    /// 0 on Black Friday rising linearly to 1 on December 24; 0 elsewhere.
    pub distance_until_christmas: Real,
}

impl CalendarRow {
    /// A row carrying only the date-part columns of `date`.
    ///
    /// Holiday, payday and special-day columns start neutral; the pay month
    /// starts as the calendar month.
    pub fn new(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        Self {
            date,
            year,
            quarter: date.quarter(),
            month,
            iso_week: date.iso_week().week,
            weekday: date.weekday().ordinal(),
            day,
            fiscal_year: 0,
            holiday_name: None,
            is_holiday: false,
            is_payday: false,
            pay_month: month,
            pay_year: year,
            distance_since_payday: 0.0,
            special_day: None,
            distance_until_christmas: 0.0,
        }
    }

    /// The `(pay_year, pay_month)` grouping key.
    pub fn pay_key(&self) -> (u16, u8) {
        (self.pay_year, self.pay_month)
    }
}

/// A non-fatal condition found while building a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarWarning {
    /// The calendar month has no business day, so no payday was emitted and
    /// its days join the neighbouring pay-month bucket.
    EmptyPayMonth {
        /// Calendar year.
        year: u16,
        /// Calendar month (1–12).
        month: u8,
    },
}

impl std::fmt::Display for CalendarWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarWarning::EmptyPayMonth { year, month } => match Month::from_number(*month) {
                Ok(m) => write!(f, "no business day for a payday in {m} {year}"),
                Err(_) => write!(f, "no business day for a payday in {year}-{month:02}"),
            },
        }
    }
}

/// An ordered, gap-free sequence of [`CalendarRow`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTable {
    rows: Vec<CalendarRow>,
    warnings: Vec<CalendarWarning>,
}

impl CalendarTable {
    pub(crate) fn from_rows(rows: Vec<CalendarRow>) -> Self {
        Self {
            rows,
            warnings: Vec::new(),
        }
    }

    /// All rows, ascending by date.
    pub fn rows(&self) -> &[CalendarRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [CalendarRow] {
        &mut self.rows
    }

    /// Warnings raised while building the table.
    pub fn warnings(&self) -> &[CalendarWarning] {
        &self.warnings
    }

    pub(crate) fn push_warning(&mut self, warning: CalendarWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row.
    pub fn first(&self) -> Option<&CalendarRow> {
        self.rows.first()
    }

    /// The last row.
    pub fn last(&self) -> Option<&CalendarRow> {
        self.rows.last()
    }

    /// The row for `date`, if it is inside the table.
    pub fn get(&self, date: Date) -> Option<&CalendarRow> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarRow> {
        self.rows.iter()
    }

    /// Dates flagged as paydays.
    pub fn paydays(&self) -> impl Iterator<Item = Date> + '_ {
        self.rows.iter().filter(|r| r.is_payday).map(|r| r.date)
    }

    /// Contiguous runs of rows sharing a `(pay_year, pay_month)` key, as
    /// index ranges into [`rows`](Self::rows).
    pub fn pay_month_groups(&self) -> Vec<((u16, u8), Range<usize>)> {
        let mut groups: Vec<((u16, u8), Range<usize>)> = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            match groups.last_mut() {
                Some((key, range)) if *key == row.pay_key() => range.end = i + 1,
                _ => groups.push((row.pay_key(), i..i + 1)),
            }
        }
        groups
    }

    /// Keep only rows with `start <= date <= end`, and only warnings about
    /// months overlapping that window.
    pub(crate) fn retain_window(&mut self, start: Date, end: Date) {
        self.rows.retain(|r| start <= r.date && r.date <= end);
        let first = (start.year(), start.month());
        let last = (end.year(), end.month());
        self.warnings.retain(|w| match *w {
            CalendarWarning::EmptyPayMonth { year, month } => {
                first <= (year, month) && (year, month) <= last
            }
        });
    }

    /// Consume the table, returning its rows.
    pub fn into_rows(self) -> Vec<CalendarRow> {
        self.rows
    }
}

impl IntoIterator for CalendarTable {
    type Item = CalendarRow;
    type IntoIter = std::vec::IntoIter<CalendarRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CalendarTable {
    type Item = &'a CalendarRow;
    type IntoIter = std::slice::Iter<'a, CalendarRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
