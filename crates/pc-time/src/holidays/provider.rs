use std::collections::{BTreeMap, BTreeSet};

use super::country::Country;
use crate::date::Date;
use pc_core::errors::{Error, Result};

/// Observed holidays keyed by date, one name per date.
pub type HolidayMap = BTreeMap<Date, String>;

/// A source of observed holidays.
///
/// Implementations must be deterministic for a given `(country, years)` pair
/// and must return at most one name per date.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// Observed holidays of `country` falling in any of `years`.
    ///
    /// # Errors
    /// [`Error::UnsupportedCountry`] if the provider has no data for
    /// `country`.
    fn holidays(&self, country: &str, years: &BTreeSet<u16>) -> Result<HolidayMap>;

    /// The name this provider gives Easter Sunday in `country`, if it lists
    /// Easter Sunday at all.
    fn easter_sunday_label(&self, country: &str) -> Result<Option<String>> {
        let _ = country;
        Ok(None)
    }
}

/// The built-in rule-based provider backed by [`Country`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

impl HolidayProvider for BuiltinHolidays {
    fn holidays(&self, country: &str, years: &BTreeSet<u16>) -> Result<HolidayMap> {
        let rules = Country::from_name(country)?.rules();
        let mut map = HolidayMap::new();
        for &year in years {
            for h in rules.holidays(year)? {
                map.entry(h.date).or_insert_with(|| h.name.to_owned());
            }
        }
        Ok(map)
    }

    fn easter_sunday_label(&self, country: &str) -> Result<Option<String>> {
        let rules = Country::from_name(country)?.rules();
        Ok(rules.easter_sunday_label().map(str::to_owned))
    }
}

/// A provider serving a fixed, caller-supplied holiday list for one country.
///
/// Useful for plugging in an external dataset that has already been loaded,
/// or for company-specific closing days.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    country: String,
    holidays: HolidayMap,
    easter_sunday_label: Option<String>,
}

impl StaticHolidays {
    /// Create an empty list for `country`.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    /// Add a holiday; a later insert on the same date replaces the name.
    pub fn with_holiday(mut self, date: Date, name: impl Into<String>) -> Self {
        self.holidays.insert(date, name.into());
        self
    }

    /// Set the name under which Easter Sunday appears in this list.
    pub fn with_easter_sunday_label(mut self, label: impl Into<String>) -> Self {
        self.easter_sunday_label = Some(label.into());
        self
    }

    fn check_country(&self, country: &str) -> Result<()> {
        if self.country.eq_ignore_ascii_case(country.trim()) {
            Ok(())
        } else {
            Err(Error::UnsupportedCountry(country.to_owned()))
        }
    }
}

impl HolidayProvider for StaticHolidays {
    fn holidays(&self, country: &str, years: &BTreeSet<u16>) -> Result<HolidayMap> {
        self.check_country(country)?;
        Ok(self
            .holidays
            .iter()
            .filter(|(d, _)| years.contains(&d.year()))
            .map(|(d, name)| (*d, name.clone()))
            .collect())
    }

    fn easter_sunday_label(&self, country: &str) -> Result<Option<String>> {
        self.check_country(country)?;
        Ok(self.easter_sunday_label.clone())
    }
}
