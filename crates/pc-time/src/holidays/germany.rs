//! Germany nationwide public holidays.

use super::{Holiday, HolidayRules};
use pc_core::errors::Result;

/// Germany (holidays observed in every federal state).
///
/// * Neujahr (Jan 1)
/// * Karfreitag (Easter - 2)
/// * Ostermontag (Easter + 1)
/// * Erster Mai (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Tag der Deutschen Einheit (Oct 3, from 1990)
/// * Erster Weihnachtstag (Dec 25)
/// * Zweiter Weihnachtstag (Dec 26)
///
/// Easter Sunday is only a public holiday in Brandenburg, so no Easter
/// Sunday label is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl HolidayRules for Germany {
    fn name(&self) -> &'static str {
        "Germany"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = vec![
            Holiday::fixed(year, 1, 1, "Neujahr")?,
            Holiday::easter(year, -2, "Karfreitag")?,
            Holiday::easter(year, 1, "Ostermontag")?,
            Holiday::fixed(year, 5, 1, "Erster Mai")?,
            Holiday::easter(year, 39, "Christi Himmelfahrt")?,
            Holiday::easter(year, 50, "Pfingstmontag")?,
        ];
        if year >= 1990 {
            days.push(Holiday::fixed(year, 10, 3, "Tag der Deutschen Einheit")?);
        }
        days.extend([
            Holiday::fixed(year, 12, 25, "Erster Weihnachtstag")?,
            Holiday::fixed(year, 12, 26, "Zweiter Weihnachtstag")?,
        ]);
        Ok(days)
    }
}
