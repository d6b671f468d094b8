//! Norway public holidays.

use super::{Holiday, HolidayRules};
use pc_core::errors::Result;

/// Name of Easter Sunday in the Norwegian list.
pub const EASTER_SUNDAY: &str = "Første påskedag";

/// Norway.
///
/// The following public holidays are observed:
/// * Første nyttårsdag (Jan 1)
/// * Skjærtorsdag (Easter - 3)
/// * Langfredag (Easter - 2)
/// * Første påskedag (Easter Sunday)
/// * Andre påskedag (Easter Monday)
/// * Arbeidernes dag (May 1, from 1947)
/// * Grunnlovsdag (May 17, from 1947)
/// * Kristi himmelfartsdag (Easter + 39)
/// * Første pinsedag (Easter + 49)
/// * Andre pinsedag (Easter + 50)
/// * Første juledag (Dec 25)
/// * Andre juledag (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Norway;

impl HolidayRules for Norway {
    fn name(&self) -> &'static str {
        "Norway"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = vec![
            Holiday::fixed(year, 1, 1, "Første nyttårsdag")?,
            Holiday::easter(year, -3, "Skjærtorsdag")?,
            Holiday::easter(year, -2, "Langfredag")?,
            Holiday::easter(year, 0, EASTER_SUNDAY)?,
            Holiday::easter(year, 1, "Andre påskedag")?,
        ];
        if year >= 1947 {
            days.push(Holiday::fixed(year, 5, 1, "Arbeidernes dag")?);
            days.push(Holiday::fixed(year, 5, 17, "Grunnlovsdag")?);
        }
        days.extend([
            Holiday::easter(year, 39, "Kristi himmelfartsdag")?,
            Holiday::easter(year, 49, "Første pinsedag")?,
            Holiday::easter(year, 50, "Andre pinsedag")?,
            Holiday::fixed(year, 12, 25, "Første juledag")?,
            Holiday::fixed(year, 12, 26, "Andre juledag")?,
        ]);
        Ok(days)
    }

    fn easter_sunday_label(&self) -> Option<&'static str> {
        Some(EASTER_SUNDAY)
    }
}
