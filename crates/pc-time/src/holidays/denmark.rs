//! Denmark public holidays.

use super::{Holiday, HolidayRules};
use pc_core::errors::Result;

/// Name of Easter Sunday in the Danish list.
pub const EASTER_SUNDAY: &str = "Påskedag";

/// Denmark.
///
/// The following public holidays are observed:
/// * Nytårsdag (Jan 1)
/// * Skærtorsdag (Maundy Thursday, Easter - 3)
/// * Langfredag (Good Friday, Easter - 2)
/// * Påskedag (Easter Sunday)
/// * Anden påskedag (Easter Monday)
/// * Store bededag (Great Prayer Day, Easter + 26, abolished from 2024)
/// * Kristi himmelfartsdag (Ascension, Easter + 39)
/// * Pinsedag (Whit Sunday, Easter + 49)
/// * Anden pinsedag (Whit Monday, Easter + 50)
/// * Juledag (Dec 25)
/// * Anden juledag (Dec 26)
///
/// Constitution Day, Christmas Eve and New Year's Eve are customary days off
/// but not public holidays, so they are not listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Denmark;

impl HolidayRules for Denmark {
    fn name(&self) -> &'static str {
        "Denmark"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = vec![
            Holiday::fixed(year, 1, 1, "Nytårsdag")?,
            Holiday::easter(year, -3, "Skærtorsdag")?,
            Holiday::easter(year, -2, "Langfredag")?,
            Holiday::easter(year, 0, EASTER_SUNDAY)?,
            Holiday::easter(year, 1, "Anden påskedag")?,
        ];
        if year <= 2023 {
            days.push(Holiday::easter(year, 26, "Store bededag")?);
        }
        days.extend([
            Holiday::easter(year, 39, "Kristi himmelfartsdag")?,
            Holiday::easter(year, 49, "Pinsedag")?,
            Holiday::easter(year, 50, "Anden pinsedag")?,
            Holiday::fixed(year, 12, 25, "Juledag")?,
            Holiday::fixed(year, 12, 26, "Anden juledag")?,
        ]);
        Ok(days)
    }

    fn easter_sunday_label(&self) -> Option<&'static str> {
        Some(EASTER_SUNDAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn names_on(year: u16, d: Date) -> Vec<&'static str> {
        Denmark
            .holidays(year)
            .unwrap()
            .into_iter()
            .filter(|h| h.date == d)
            .map(|h| h.name)
            .collect()
    }

    #[test]
    fn easter_block_2022() {
        // Easter Sunday 2022: April 17
        assert_eq!(names_on(2022, date(2022, 4, 14)), ["Skærtorsdag"]);
        assert_eq!(names_on(2022, date(2022, 4, 15)), ["Langfredag"]);
        assert_eq!(names_on(2022, date(2022, 4, 17)), ["Påskedag"]);
        assert_eq!(names_on(2022, date(2022, 4, 18)), ["Anden påskedag"]);
    }

    #[test]
    fn great_prayer_day_removed_2024() {
        // Easter 2023: April 9, so Easter + 26 = May 5
        assert_eq!(names_on(2023, date(2023, 5, 5)), ["Store bededag"]);
        assert_eq!(Denmark.holidays(2023).unwrap().len(), 11);
        assert_eq!(Denmark.holidays(2024).unwrap().len(), 10);
    }

    #[test]
    fn christmas_eve_is_not_public() {
        assert!(names_on(2022, date(2022, 12, 24)).is_empty());
        assert_eq!(names_on(2022, date(2022, 12, 26)), ["Anden juledag"]);
    }
}
