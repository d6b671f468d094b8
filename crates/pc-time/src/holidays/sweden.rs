//! Sweden public holidays.

use super::{Holiday, HolidayRules};
use crate::weekday::Weekday;
use pc_core::errors::Result;

/// Name of Easter Sunday in the Swedish list.
pub const EASTER_SUNDAY: &str = "Påskdagen";

/// Sweden.
///
/// The following public holidays are observed:
/// * Nyårsdagen (Jan 1)
/// * Trettondedag jul (Epiphany, Jan 6)
/// * Långfredagen (Easter - 2)
/// * Påskdagen (Easter Sunday)
/// * Annandag påsk (Easter Monday)
/// * Första maj (May 1)
/// * Kristi himmelsfärdsdag (Easter + 39)
/// * Sveriges nationaldag (Jun 6, from 2005)
/// * Pingstdagen (Easter + 49)
/// * Annandag pingst (Easter + 50, until 2004)
/// * Midsommarafton (Friday between Jun 19 and Jun 25)
/// * Midsommardagen (Saturday between Jun 20 and Jun 26)
/// * Alla helgons dag (Saturday between Oct 31 and Nov 6)
/// * Julafton (Dec 24)
/// * Juldagen (Dec 25)
/// * Annandag jul (Dec 26)
/// * Nyårsafton (Dec 31)
///
/// Ordinary Sundays are not listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweden;

impl HolidayRules for Sweden {
    fn name(&self) -> &'static str {
        "Sweden"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = vec![
            Holiday::fixed(year, 1, 1, "Nyårsdagen")?,
            Holiday::fixed(year, 1, 6, "Trettondedag jul")?,
            Holiday::easter(year, -2, "Långfredagen")?,
            Holiday::easter(year, 0, EASTER_SUNDAY)?,
            Holiday::easter(year, 1, "Annandag påsk")?,
            Holiday::fixed(year, 5, 1, "Första maj")?,
            Holiday::easter(year, 39, "Kristi himmelsfärdsdag")?,
        ];
        if year >= 2005 {
            days.push(Holiday::fixed(year, 6, 6, "Sveriges nationaldag")?);
        }
        days.push(Holiday::easter(year, 49, "Pingstdagen")?);
        if year <= 2004 {
            days.push(Holiday::easter(year, 50, "Annandag pingst")?);
        }
        days.extend([
            Holiday::floating(year, 6, 19, Weekday::Friday, "Midsommarafton")?,
            Holiday::floating(year, 6, 20, Weekday::Saturday, "Midsommardagen")?,
            Holiday::floating(year, 10, 31, Weekday::Saturday, "Alla helgons dag")?,
            Holiday::fixed(year, 12, 24, "Julafton")?,
            Holiday::fixed(year, 12, 25, "Juldagen")?,
            Holiday::fixed(year, 12, 26, "Annandag jul")?,
            Holiday::fixed(year, 12, 31, "Nyårsafton")?,
        ]);
        Ok(days)
    }

    fn easter_sunday_label(&self) -> Option<&'static str> {
        Some(EASTER_SUNDAY)
    }
}
