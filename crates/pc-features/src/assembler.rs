//! Calendar assembler: pads the range, runs every stage and trims back.

use std::collections::BTreeSet;

use pc_core::errors::{Error, Result};
use pc_time::{BuiltinHolidays, Date, HolidayProvider};

use crate::axis::build_axis;
use crate::config::CalendarConfig;
use crate::fiscal_year::assign_fiscal_years;
use crate::holidays::apply_holidays;
use crate::payday::compute_paydays;
use crate::special_days::compute_special_days;
use crate::table::CalendarTable;

/// Builds a [`CalendarTable`] for `start..=end`.
///
/// ```
/// use pc_features::CalendarBuilder;
/// use pc_time::Date;
///
/// let start = Date::from_ymd(2022, 11, 1).unwrap();
/// let end = Date::from_ymd(2022, 11, 30).unwrap();
/// let table = CalendarBuilder::new(start, end)
///     .country("DK")
///     .fiscal_year_start_month(1)
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarBuilder<'a> {
    start: Date,
    end: Date,
    config: CalendarConfig,
    provider: &'a dyn HolidayProvider,
}

impl<'a> CalendarBuilder<'a> {
    /// A builder with the default configuration and the built-in holidays.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            config: CalendarConfig::default(),
            provider: &BuiltinHolidays,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: CalendarConfig) -> Self {
        self.config = config;
        self
    }

    /// Country whose holidays are used.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.config.country = country.into();
        self
    }

    /// First month of the fiscal year.
    pub fn fiscal_year_start_month(mut self, month: u8) -> Self {
        self.config.fiscal_year_start_month = month;
        self
    }

    /// Months of padding on each side of the range.
    pub fn padding_months(mut self, months: u8) -> Self {
        self.config.padding_months = months;
        self
    }

    /// Enable or disable the day-after-Easter marker.
    pub fn mark_day_after_easter(mut self, enabled: bool) -> Self {
        self.config.mark_day_after_easter = enabled;
        self
    }

    /// Source of holidays in place of [`BuiltinHolidays`].
    pub fn holiday_provider(mut self, provider: &'a dyn HolidayProvider) -> Self {
        self.provider = provider;
        self
    }

    /// The configuration this builder will use.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Build the table.
    ///
    /// # Errors
    /// - [`Error::Precondition`] for an invalid configuration.
    /// - [`Error::InvalidRange`] if `start > end`.
    /// - Whatever the holiday provider returns, typically
    ///   [`Error::UnsupportedCountry`].
    pub fn build(&self) -> Result<CalendarTable> {
        let _span = tracing::debug_span!(
            "build_calendar",
            start = %self.start,
            end = %self.end,
            country = %self.config.country,
        )
        .entered();

        self.config.validate()?;
        if self.start > self.end {
            return Err(Error::InvalidRange {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        let (padded_start, padded_end) =
            padded_range(self.start, self.end, self.config.padding_months);
        tracing::debug!(%padded_start, %padded_end, "padded range");

        let table = build_axis(padded_start, padded_end)?;
        let table = assign_fiscal_years(table, self.config.fiscal_year_start_month)?;

        let years: BTreeSet<u16> = (padded_start.year()..=padded_end.year()).collect();
        let holidays = self.provider.holidays(&self.config.country, &years)?;
        let table = apply_holidays(table, &holidays);

        let holiday_dates: BTreeSet<Date> =
            table.iter().filter(|r| r.is_holiday).map(|r| r.date).collect();
        let table = compute_paydays(table, &holiday_dates);

        let easter_label = if self.config.mark_day_after_easter {
            self.provider.easter_sunday_label(&self.config.country)?
        } else {
            None
        };
        let mut table = compute_special_days(table, easter_label.as_deref())?;

        table.retain_window(self.start, self.end);
        tracing::debug!(
            rows = table.len(),
            warnings = table.warnings().len(),
            "calendar built"
        );
        Ok(table)
    }
}

/// The padded window: from the first of the month `months` before `start`
/// to the last day of the month `months` after `end`, clamped to the
/// supported date range.
pub(crate) fn padded_range(start: Date, end: Date, months: u8) -> (Date, Date) {
    let n = i32::from(months);
    let padded_start = start
        .start_of_month()
        .advance_months(-n)
        .unwrap_or(Date::MIN);
    let padded_end = end
        .advance_months(n)
        .map(Date::end_of_month)
        .unwrap_or(Date::MAX);
    (padded_start, padded_end)
}

/// Build the calendar for `start..=end` with the built-in holidays of
/// `country` and otherwise default options.
///
/// # Errors
/// See [`CalendarBuilder::build`].
pub fn create_calendar(
    start: Date,
    end: Date,
    country: &str,
    fy_start_month: u8,
) -> Result<CalendarTable> {
    CalendarBuilder::new(start, end)
        .country(country)
        .fiscal_year_start_month(fy_start_month)
        .build()
}
