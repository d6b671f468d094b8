//! Integration tests for the special-day engine.

use approx::assert_relative_eq;
use pc_features::{
    black_friday, build_axis, compute_special_days, create_calendar, cyber_monday, CalendarBuilder,
    SpecialDay,
};
use pc_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn denmark_2022_black_friday_family() {
    let t = create_calendar(date(2022, 11, 1), date(2022, 12, 31), "Denmark", 4).unwrap();
    let special = |d| t.get(d).unwrap().special_day.clone();
    assert_eq!(special(date(2022, 11, 24)), None);
    assert_eq!(special(date(2022, 11, 25)), Some(SpecialDay::BlackFriday));
    assert_eq!(special(date(2022, 11, 26)), Some(SpecialDay::BlackWeekend));
    assert_eq!(special(date(2022, 11, 27)), Some(SpecialDay::BlackWeekend));
    assert_eq!(special(date(2022, 11, 28)), Some(SpecialDay::CyberMonday));
    assert_eq!(special(date(2022, 11, 29)), None);
}

#[test]
fn christmas_shopping_in_denmark() {
    let t = create_calendar(date(2022, 12, 20), date(2022, 12, 31), "Denmark", 4).unwrap();
    let shopping: Vec<u8> = t
        .iter()
        .filter(|r| r.special_day == Some(SpecialDay::ChristmasShopping))
        .map(|r| r.day)
        .collect();
    assert_eq!(shopping, [24, 27, 28, 29, 30, 31]);
}

#[test]
fn christmas_eve_holiday_is_not_shopping() {
    let t = create_calendar(date(2022, 12, 24), date(2022, 12, 24), "Sweden", 1).unwrap();
    let row = &t.rows()[0];
    assert_eq!(row.holiday_name.as_deref(), Some("Julafton"));
    assert_eq!(row.special_day, None);
    assert_relative_eq!(row.distance_until_christmas, 1.0);
}

#[test]
fn distance_until_christmas_2022() {
    let t = create_calendar(date(2022, 6, 1), date(2022, 12, 31), "Denmark", 4).unwrap();
    let dist = |d| t.get(d).unwrap().distance_until_christmas;
    assert_relative_eq!(dist(date(2022, 6, 1)), 0.0);
    assert_relative_eq!(dist(date(2022, 11, 25)), 0.0);
    assert_relative_eq!(dist(date(2022, 12, 1)), 6.0 / 29.0);
    assert_relative_eq!(dist(date(2022, 12, 24)), 1.0);
    assert_relative_eq!(dist(date(2022, 12, 31)), 0.0);
}

#[test]
fn day_after_easter_uses_country_label() {
    let t = create_calendar(date(2022, 4, 1), date(2022, 4, 30), "Denmark", 4).unwrap();
    let row = t.get(date(2022, 4, 18)).unwrap();
    assert_eq!(
        row.special_day,
        Some(SpecialDay::DayAfterEaster("Påskedag".into()))
    );
    assert_eq!(row.special_day.as_ref().unwrap().to_string(), "Day after Påskedag");
    assert_eq!(row.holiday_name.as_deref(), Some("Anden påskedag"));

    let n = create_calendar(date(2022, 4, 1), date(2022, 4, 30), "Norway", 1).unwrap();
    assert_eq!(
        n.get(date(2022, 4, 18)).unwrap().special_day,
        Some(SpecialDay::DayAfterEaster("Første påskedag".into()))
    );
}

#[test]
fn day_after_easter_can_be_disabled() {
    let t = CalendarBuilder::new(date(2022, 4, 1), date(2022, 4, 30))
        .mark_day_after_easter(false)
        .build()
        .unwrap();
    assert!(t.iter().all(|r| r.special_day.is_none()));
}

#[test]
fn germany_has_no_easter_label() {
    let t = create_calendar(date(2022, 4, 1), date(2022, 4, 30), "Germany", 1).unwrap();
    assert!(t.iter().all(|r| r.special_day.is_none()));
}

proptest! {
    #[test]
    fn one_black_friday_family_per_year(year in 1901u16..=2198) {
        let t = compute_special_days(
            build_axis(date(year, 1, 1), date(year, 12, 31)).unwrap(),
            None,
        )
        .unwrap();
        let with = |s: SpecialDay| -> Vec<Date> {
            t.iter().filter(|r| r.special_day.as_ref() == Some(&s)).map(|r| r.date).collect()
        };
        let bf = with(SpecialDay::BlackFriday);
        let cm = with(SpecialDay::CyberMonday);
        let weekend = with(SpecialDay::BlackWeekend);
        prop_assert_eq!(bf.len(), 1);
        prop_assert_eq!(cm.len(), 1);
        prop_assert!(bf[0] < cm[0]);
        prop_assert_eq!(bf[0], black_friday(year).unwrap());
        prop_assert_eq!(cm[0], cyber_monday(year).unwrap());
        prop_assert_eq!(bf[0].weekday(), Weekday::Friday);
        prop_assert_eq!(cm[0].weekday(), Weekday::Monday);
        prop_assert_eq!(weekend.len(), 2);
        prop_assert_eq!(weekend[0].weekday(), Weekday::Saturday);
        prop_assert_eq!(weekend[1].weekday(), Weekday::Sunday);
        prop_assert!(t.iter().all(|r| (0.0..=1.0).contains(&r.distance_until_christmas)));
    }
}
