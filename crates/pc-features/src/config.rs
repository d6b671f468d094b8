//! Calendar build configuration.

use pc_core::ensure;
use pc_core::errors::Result;

/// Maximum number of padding months on either side of the requested range.
pub const MAX_PADDING_MONTHS: u8 = 24;

/// Options controlling how a calendar table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Country whose holidays are used, by name or ISO code.
    pub country: String,
    /// First month (1–12) of the fiscal year.
    pub fiscal_year_start_month: u8,
    /// Whole months added before and after the range before computing, so
    /// paydays and pay months at the edges are correct.
    pub padding_months: u8,
    /// Mark the day after Easter Sunday as a special day.
    pub mark_day_after_easter: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            country: "Denmark".to_owned(),
            fiscal_year_start_month: 4,
            padding_months: 13,
            mark_day_after_easter: true,
        }
    }
}

impl CalendarConfig {
    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the fiscal-year start month.
    pub fn with_fiscal_year_start_month(mut self, month: u8) -> Self {
        self.fiscal_year_start_month = month;
        self
    }

    /// Set the padding in months.
    pub fn with_padding_months(mut self, months: u8) -> Self {
        self.padding_months = months;
        self
    }

    /// Enable or disable the day-after-Easter marker.
    pub fn with_mark_day_after_easter(mut self, enabled: bool) -> Self {
        self.mark_day_after_easter = enabled;
        self
    }

    /// Check the numeric options.
    ///
    /// # Errors
    /// [`Error::Precondition`](pc_core::Error::Precondition) if the fiscal
    /// start month is outside 1..=12 or the padding outside
    /// 1..=[`MAX_PADDING_MONTHS`].
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=12).contains(&self.fiscal_year_start_month),
            "fiscal year start month must be in 1..=12, got {}",
            self.fiscal_year_start_month
        );
        ensure!(
            (1..=MAX_PADDING_MONTHS).contains(&self.padding_months),
            "padding months must be in 1..={MAX_PADDING_MONTHS}, got {}",
            self.padding_months
        );
        Ok(())
    }
}
