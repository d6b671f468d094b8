//! End-to-end tests for the calendar assembler.

use approx::assert_relative_eq;
use pc_core::Error;
use pc_features::{create_calendar, CalendarBuilder, CalendarConfig, CalendarTable};
use pc_time::{Country, Date};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn single_day_table() {
    let t = create_calendar(date(2022, 3, 10), date(2022, 3, 10), "Denmark", 4).unwrap();
    assert_eq!(t.len(), 1);
    let row = &t.rows()[0];
    assert_eq!(row.date, date(2022, 3, 10));
    assert_eq!((row.year, row.quarter, row.month, row.day), (2022, 1, 3, 10));
    assert_eq!(row.iso_week, 10);
    assert_eq!(row.weekday, 4);
    assert_eq!(row.fiscal_year, 2122);
    assert!(!row.is_holiday);
    assert!(!row.is_payday);
    assert_eq!(row.special_day, None);
}

#[test]
fn fiscal_year_switches_at_start_month() {
    let t = create_calendar(date(2022, 3, 31), date(2022, 4, 1), "Denmark", 4).unwrap();
    let labels: Vec<u16> = t.iter().map(|r| r.fiscal_year).collect();
    assert_eq!(labels, [2122, 2223]);
}

#[test]
fn reversed_range_fails() {
    let err = create_calendar(date(2022, 3, 11), date(2022, 3, 10), "Denmark", 4).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { .. }));
    assert_eq!(
        err.to_string(),
        "invalid date range: start 2022-03-11 is after end 2022-03-10"
    );
}

#[test]
fn unsupported_country_fails() {
    let err = create_calendar(date(2022, 1, 1), date(2022, 1, 31), "Atlantis", 4).unwrap_err();
    assert_eq!(err, Error::UnsupportedCountry("Atlantis".into()));
}

#[test]
fn invalid_fiscal_start_fails() {
    let err = create_calendar(date(2022, 1, 1), date(2022, 1, 31), "Denmark", 13).unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}

#[test]
fn country_code_matches_name() {
    let by_name = create_calendar(date(2022, 1, 1), date(2022, 12, 31), "Denmark", 4).unwrap();
    let by_code = create_calendar(date(2022, 1, 1), date(2022, 12, 31), "dk", 4).unwrap();
    assert_eq!(by_name, by_code);
}

#[test]
fn full_year_for_every_country() {
    for c in Country::ALL {
        let t = create_calendar(date(2022, 1, 1), date(2022, 12, 31), c.code(), 1).unwrap();
        assert_eq!(t.len(), 365, "{c}");
        assert_eq!(t.paydays().count(), 12, "{c}");
        assert!(t.get(date(2022, 12, 25)).unwrap().is_holiday, "{c}");
        assert!(t.warnings().is_empty(), "{c}");
    }
}

#[test]
fn range_at_supported_limits() {
    let t = create_calendar(Date::MIN, date(1900, 1, 31), "Denmark", 4).unwrap();
    assert_eq!(t.len(), 31);
    assert_eq!(t.first().unwrap().holiday_name.as_deref(), Some("Nytårsdag"));
    assert!(t.get(date(1900, 1, 31)).unwrap().is_payday);

    let t = create_calendar(date(2199, 12, 1), Date::MAX, "Denmark", 4).unwrap();
    assert_eq!(t.len(), 31);
    assert_eq!(t.last().unwrap().date, Date::MAX);
}

#[test]
fn builder_with_config() {
    let config = CalendarConfig::default()
        .with_country("Finland")
        .with_fiscal_year_start_month(7)
        .with_padding_months(2);
    let t = CalendarBuilder::new(date(2022, 6, 1), date(2022, 7, 31))
        .with_config(config)
        .build()
        .unwrap();
    assert_eq!(t.get(date(2022, 6, 30)).unwrap().fiscal_year, 2122);
    assert_eq!(t.get(date(2022, 7, 1)).unwrap().fiscal_year, 2223);
    assert_eq!(
        t.get(date(2022, 6, 25)).unwrap().holiday_name.as_deref(),
        Some("Juhannuspäivä")
    );
}

#[test]
fn table_accessors() {
    let t = create_calendar(date(2022, 5, 1), date(2022, 6, 2), "Denmark", 4).unwrap();
    assert!(!t.is_empty());
    assert_eq!(t.first().unwrap().date, date(2022, 5, 1));
    assert_eq!(t.paydays().collect::<Vec<_>>(), [date(2022, 5, 31)]);
    let groups = t.pay_month_groups();
    assert_eq!(groups, [((2022, 5), 0..31), ((2022, 6), 31..33)]);
    let rows = t.clone().into_rows();
    assert_eq!(rows.len(), 33);
    assert_eq!((&t).into_iter().count(), t.into_iter().count());
}

#[test]
fn identical_inputs_identical_tables() {
    let a = create_calendar(date(2021, 11, 1), date(2023, 2, 28), "Norway", 4).unwrap();
    let b = create_calendar(date(2021, 11, 1), date(2023, 2, 28), "Norway", 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn padding_does_not_change_interior_rows() {
    let short = CalendarBuilder::new(date(2022, 6, 1), date(2022, 6, 30))
        .padding_months(1)
        .build()
        .unwrap();
    let long = CalendarBuilder::new(date(2022, 6, 1), date(2022, 6, 30))
        .padding_months(24)
        .build()
        .unwrap();
    assert_eq!(short, long);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn check_table(t: &CalendarTable, start: Date, end: Date) -> Result<(), TestCaseError> {
    prop_assert_eq!(t.first().map(|r| r.date), Some(start));
    prop_assert_eq!(t.last().map(|r| r.date), Some(end));
    prop_assert_eq!(t.len() as i32, start.days_between(end) + 1);
    for w in t.rows().windows(2) {
        prop_assert_eq!(w[1].date, w[0].date + 1);
    }
    for r in t.iter() {
        prop_assert_eq!(r.is_holiday, r.holiday_name.is_some());
        prop_assert!((0.0..=1.0).contains(&r.distance_since_payday));
        prop_assert!((0.0..=1.0).contains(&r.distance_until_christmas));
        prop_assert!((1..=12).contains(&r.pay_month));
    }
    let groups = t.pay_month_groups();
    for (i, (_, range)) in groups.iter().enumerate() {
        let rows = &t.rows()[range.clone()];
        for w in rows.windows(2) {
            prop_assert!(w[0].distance_since_payday <= w[1].distance_since_payday);
        }
        let interior = i > 0 && i + 1 < groups.len();
        if interior {
            assert_relative_eq!(rows[0].distance_since_payday, 0.0);
            assert_relative_eq!(rows[rows.len() - 1].distance_since_payday, 1.0);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn tables_are_well_formed(
        start_serial in Date::from_ymd(1950, 1, 1).unwrap().serial()
            ..Date::from_ymd(2150, 1, 1).unwrap().serial(),
        len in 0i32..500,
        country in 0usize..5,
        fy in 1u8..=12,
    ) {
        let start = Date::from_serial(start_serial).unwrap();
        let end = start + len;
        let c = Country::ALL[country];
        let t = create_calendar(start, end, c.name(), fy).unwrap();
        check_table(&t, start, end)?;
    }
}
