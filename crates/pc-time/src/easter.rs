//! Gregorian Easter computus.
//!
//! Most movable holidays in the built-in country rules are fixed offsets from
//! Easter Sunday (Good Friday = -2, Ascension = +39, Whit Monday = +50, …).

use crate::date::Date;
use pc_core::errors::Result;

/// Easter Sunday of `year` (Anonymous Gregorian algorithm).
///
/// # Errors
/// Returns an error if `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = u32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l + 114 - 7 * m) / 31;
    let day = (h + l + 114 - 7 * m) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

/// The date `offset` days from Easter Sunday of `year`.
pub fn easter_offset(year: u16, offset: i32) -> Result<Date> {
    easter_sunday(year)?.add_days(offset)
}
