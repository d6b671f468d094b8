//! Finland public holidays.

use super::{Holiday, HolidayRules};
use crate::weekday::Weekday;
use pc_core::errors::Result;

/// Name of Easter Sunday in the Finnish list.
pub const EASTER_SUNDAY: &str = "Pääsiäispäivä";

/// Finland.
///
/// The following public holidays are observed:
/// * Uudenvuodenpäivä (Jan 1)
/// * Loppiainen (Epiphany, Jan 6)
/// * Pitkäperjantai (Easter - 2)
/// * Pääsiäispäivä (Easter Sunday)
/// * 2. pääsiäispäivä (Easter Monday)
/// * Vappu (May 1)
/// * Helatorstai (Easter + 39)
/// * Helluntaipäivä (Easter + 49)
/// * Juhannusaatto (Friday between Jun 19 and Jun 25)
/// * Juhannuspäivä (Saturday between Jun 20 and Jun 26)
/// * Pyhäinpäivä (Saturday between Oct 31 and Nov 6)
/// * Itsenäisyyspäivä (Dec 6, from 1917)
/// * Jouluaatto (Dec 24)
/// * Joulupäivä (Dec 25)
/// * Tapaninpäivä (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Finland;

impl HolidayRules for Finland {
    fn name(&self) -> &'static str {
        "Finland"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = vec![
            Holiday::fixed(year, 1, 1, "Uudenvuodenpäivä")?,
            Holiday::fixed(year, 1, 6, "Loppiainen")?,
            Holiday::easter(year, -2, "Pitkäperjantai")?,
            Holiday::easter(year, 0, EASTER_SUNDAY)?,
            Holiday::easter(year, 1, "2. pääsiäispäivä")?,
            Holiday::fixed(year, 5, 1, "Vappu")?,
            Holiday::easter(year, 39, "Helatorstai")?,
            Holiday::easter(year, 49, "Helluntaipäivä")?,
            Holiday::floating(year, 6, 19, Weekday::Friday, "Juhannusaatto")?,
            Holiday::floating(year, 6, 20, Weekday::Saturday, "Juhannuspäivä")?,
            Holiday::floating(year, 10, 31, Weekday::Saturday, "Pyhäinpäivä")?,
        ];
        if year >= 1917 {
            days.push(Holiday::fixed(year, 12, 6, "Itsenäisyyspäivä")?);
        }
        days.extend([
            Holiday::fixed(year, 12, 24, "Jouluaatto")?,
            Holiday::fixed(year, 12, 25, "Joulupäivä")?,
            Holiday::fixed(year, 12, 26, "Tapaninpäivä")?,
        ]);
        Ok(days)
    }

    fn easter_sunday_label(&self) -> Option<&'static str> {
        Some(EASTER_SUNDAY)
    }
}
