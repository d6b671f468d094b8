//! `Date` type.
//!
//! Dates are naive (no timezone) and have day granularity. They are stored as
//! a serial number of days where serial 1 is January 1, 1900.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use pc_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported year.
pub const MAX_YEAR: u16 = 2199;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// ISO-8601 week date: the week-numbering year and week (1–53).
///
/// The week-numbering year differs from the calendar year for a few days
/// around January 1 (e.g. 2021-01-03 belongs to week 53 of 2020).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    /// ISO week-numbering year.
    pub year: u16,
    /// Week number (1–53).
    pub week: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(serial_from_ymd(MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(serial_from_ymd(MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// Returns an error if `serial` falls outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Ok(m) => m,
            Err(_) => unreachable!("decomposed month is always in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the quarter (1–4).
    pub fn quarter(&self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday, ordinal 1.
        match Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    /// Return the ISO-8601 week date.
    ///
    /// Week 1 is the week (Monday–Sunday) containing the year's first
    /// Thursday.
    pub fn iso_week(&self) -> IsoWeek {
        let year = self.year();
        let ordinal = i32::from(self.day_of_year());
        let weekday = i32::from(self.weekday().ordinal());
        let week = (ordinal - weekday + 10) / 7;
        if week < 1 {
            IsoWeek {
                year: year - 1,
                week: iso_weeks_in_year(year - 1),
            }
        } else if week > i32::from(iso_weeks_in_year(year)) {
            IsoWeek {
                year: year + 1,
                week: 1,
            }
        } else {
            IsoWeek {
                year,
                week: week as u8,
            }
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))?;
        Self::from_serial(serial)
    }

    /// The following day, or `None` at [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then_some(Date(self.0 + 1))
    }

    /// Advance by `n` calendar months, clamping the day to the target month's
    /// length (Jan 31 + 1 month = Feb 28/29).
    pub fn advance_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = i32::from(y) * 12 + i32::from(m) - 1 + n;
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&new_y) {
            return Err(Error::Date(format!(
                "year {new_y} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let new_y = new_y as u16;
        Ok(Date(serial_from_ymd(
            new_y,
            new_m,
            d.min(days_in_month(new_y, new_m)),
        )))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// The first date on or after `self` that falls on `weekday`.
    pub fn on_or_after(self, weekday: Weekday) -> Result<Self> {
        self.add_days(i32::from(self.weekday().days_until(weekday)))
    }

    /// The first date strictly after `self` that falls on `weekday`.
    pub fn next_weekday(self, weekday: Weekday) -> Result<Self> {
        self.add_days(1)?.on_or_after(weekday)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2022, 11)` returns the
    /// fourth Thursday of November 2022 (2022-11-24).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the month does not have an `n`-th
    /// such weekday, or if the month is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?.on_or_after(weekday)?;
        let day = first.day_of_month() + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Iterate over every date in `start..=end`, ascending.  Empty when
    /// `start > end`.
    pub fn range_inclusive(start: Date, end: Date) -> DateRange {
        DateRange {
            next: start.0,
            last: end.0,
        }
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Iterator over a contiguous inclusive run of dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: i32,
    last: i32,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range; use
    /// [`Date::add_days`] for a checked version.
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range.
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let mut field = || parts.next().ok_or_else(invalid);
        let (y, m, d) = (field()?, field()?, field()?);
        let year: u16 = y.parse().map_err(|_| invalid())?;
        let month: u8 = m.parse().map_err(|_| invalid())?;
        let day: u8 = d.parse().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(day))
            .ok_or_else(|| Error::Date(format!("{d} not representable as chrono::NaiveDate")))
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Number of ISO weeks (52 or 53) in the ISO week-numbering `year`.
pub fn iso_weeks_in_year(year: u16) -> u8 {
    // Weekday of December 31 (0 = Sunday); a year has 53 weeks when it ends on
    // a Thursday or the previous year ends on a Wednesday.
    let dec31 = |y: i32| (y + y / 4 - y / 100 + y / 400).rem_euclid(7);
    let y = i32::from(year);
    if dec31(y) == 4 || dec31(y - 1) == 3 {
        53
    } else {
        52
    }
}

/// Days between 1970-01-01 and 1900-01-01, plus one for the 1-based serial.
const SERIAL_OFFSET: i32 = 25_568;

/// Convert (year, month, day) to a serial number (1900-01-01 = 1).
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    // Days-from-civil on a March-based year, so the leap day falls last.
    let m = month as i32;
    let y = year as i32 - if m <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + SERIAL_OFFSET
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - SERIAL_OFFSET + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
