//! Retail special days around Black Friday and Christmas, and the day after
//! Easter Sunday.

use std::collections::BTreeMap;

use pc_core::errors::Result;
use pc_time::{Date, Weekday};

use crate::table::{CalendarTable, SpecialDay};

/// The day after the fourth Thursday of November.
pub fn black_friday(year: u16) -> Result<Date> {
    Date::nth_weekday(4, Weekday::Thursday, year, 11)?.add_days(1)
}

/// The first Monday strictly after Black Friday.
pub fn cyber_monday(year: u16) -> Result<Date> {
    black_friday(year)?.next_weekday(Weekday::Monday)
}

/// The Saturday and Sunday following Black Friday.
pub fn black_weekend(year: u16) -> Result<[Date; 2]> {
    let bf = black_friday(year)?;
    Ok([bf.add_days(1)?, bf.add_days(2)?])
}

/// December 24.
pub fn christmas_eve(year: u16) -> Result<Date> {
    Date::from_ymd(year, 12, 24)
}

#[derive(Debug, Clone, Copy)]
struct SeasonDates {
    black_friday: Date,
    cyber_monday: Date,
    black_weekend: [Date; 2],
    christmas_eve: Date,
}

impl SeasonDates {
    fn for_year(year: u16) -> Result<Self> {
        Ok(Self {
            black_friday: black_friday(year)?,
            cyber_monday: cyber_monday(year)?,
            black_weekend: black_weekend(year)?,
            christmas_eve: christmas_eve(year)?,
        })
    }

    fn classify(&self, date: Date, is_holiday: bool) -> Option<SpecialDay> {
        if date == self.black_friday {
            Some(SpecialDay::BlackFriday)
        } else if date == self.cyber_monday {
            Some(SpecialDay::CyberMonday)
        } else if self.black_weekend.contains(&date) {
            Some(SpecialDay::BlackWeekend)
        } else if date.month() == 12 && date.day_of_month() >= 24 && !is_holiday {
            Some(SpecialDay::ChristmasShopping)
        } else {
            None
        }
    }

    fn distance_until_christmas(&self, date: Date) -> f64 {
        if date < self.black_friday || date > self.christmas_eve {
            return 0.0;
        }
        let elapsed = self.black_friday.days_between(date);
        let total = self.black_friday.days_between(self.christmas_eve);
        f64::from(elapsed) / f64::from(total)
    }
}

/// Fill `special_day` and `distance_until_christmas` on every row.
///
/// Black Friday, Cyber Monday, Black Weekend and Christmas Shopping take
/// precedence in that order. When `easter_label` is given, the row following
/// each row whose holiday name equals it is marked
/// [`SpecialDay::DayAfterEaster`], unless that row already has a special day.
pub fn compute_special_days(
    mut table: CalendarTable,
    easter_label: Option<&str>,
) -> Result<CalendarTable> {
    let mut seasons: BTreeMap<u16, SeasonDates> = BTreeMap::new();
    for row in table.rows_mut() {
        let season = match seasons.get(&row.year) {
            Some(s) => *s,
            None => {
                let s = SeasonDates::for_year(row.year)?;
                seasons.insert(row.year, s);
                s
            }
        };
        row.special_day = season.classify(row.date, row.is_holiday);
        row.distance_until_christmas = season.distance_until_christmas(row.date);
    }

    if let Some(label) = easter_label {
        let rows = table.rows_mut();
        let mut marked = 0usize;
        for i in 1..rows.len() {
            let after_easter = rows[i - 1].holiday_name.as_deref() == Some(label);
            if after_easter && rows[i].special_day.is_none() {
                rows[i].special_day = Some(SpecialDay::DayAfterEaster(label.to_owned()));
                marked += 1;
            }
        }
        tracing::debug!(label, marked, "marked days after Easter");
    }
    Ok(table)
}
