//! Integration tests for `Date`, ISO week numbering and date iteration.

use pc_time::date::{days_in_month, is_leap_year, iso_weeks_in_year};
use pc_time::{Date, IsoWeek, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── ISO weeks ────────────────────────────────────────────────────────────────

#[test]
fn iso_week_known_values() {
    let cases = [
        ((2021, 1, 3), (2020, 53)),
        ((2020, 12, 31), (2020, 53)),
        ((2024, 12, 30), (2025, 1)),
        ((2022, 1, 1), (2021, 52)),
        ((2022, 1, 3), (2022, 1)),
        ((2022, 3, 10), (2022, 10)),
        ((2015, 12, 31), (2015, 53)),
        ((2008, 12, 29), (2009, 1)),
        ((2026, 1, 1), (2026, 1)),
    ];
    for ((y, m, d), (wy, w)) in cases {
        assert_eq!(
            date(y, m, d).iso_week(),
            IsoWeek { year: wy, week: w },
            "{y}-{m:02}-{d:02}"
        );
    }
}

#[test]
fn iso_weeks_per_year() {
    assert_eq!(iso_weeks_in_year(2015), 53);
    assert_eq!(iso_weeks_in_year(2020), 53);
    assert_eq!(iso_weeks_in_year(2021), 52);
    assert_eq!(iso_weeks_in_year(2022), 52);
    assert_eq!(iso_weeks_in_year(2026), 53);
}

// ─── Calendar arithmetic ──────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 11), 30);
}

#[test]
fn fourth_thursdays_of_november() {
    for (y, d) in [(2021, 25), (2022, 24), (2023, 23), (2024, 28), (2025, 27)] {
        assert_eq!(
            Date::nth_weekday(4, Weekday::Thursday, y, 11).unwrap(),
            date(y, 11, d)
        );
    }
}

#[test]
fn days_between_and_operators() {
    let a = date(2022, 11, 25);
    let b = date(2022, 12, 24);
    assert_eq!(a.days_between(b), 29);
    assert_eq!(b - a, 29);
    assert_eq!(a + 3, date(2022, 11, 28));
    assert_eq!(b - 24, date(2022, 11, 30));
    assert!(Date::MAX.add_days(1).is_err());
    assert!(Date::MIN.add_days(-1).is_err());
}

#[test]
fn month_edges() {
    let d = date(2024, 2, 10);
    assert_eq!(d.start_of_month(), date(2024, 2, 1));
    assert_eq!(d.end_of_month(), date(2024, 2, 29));
    assert!(date(2024, 2, 29).is_end_of_month());
    assert!(!date(2023, 2, 27).is_end_of_month());
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn serial_roundtrips_through_ymd(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn consecutive_days_advance_weekday(serial in Date::MIN.serial()..Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let next = d.succ().unwrap();
        prop_assert_eq!(d.weekday().days_until(next.weekday()), 1);
    }

    #[test]
    fn iso_week_is_stable_within_a_week(serial in Date::MIN.serial()..(Date::MAX.serial() - 7)) {
        let d = Date::from_serial(serial).unwrap();
        let week = d.iso_week();
        prop_assert!((1..=53).contains(&week.week));
        // The Monday of d's week and d share the ISO week.
        let back = i32::from(d.weekday().ordinal()) - 1;
        if let Ok(monday) = d.add_days(-back) {
            prop_assert_eq!(monday.iso_week(), week);
        }
    }
}
