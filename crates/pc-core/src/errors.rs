//! Error types for paycal.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros cover the
//! common "check a precondition" and "bail out" cases.

use thiserror::Error;

/// The top-level error type used throughout paycal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested date range is empty because `start > end`.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start of the rejected range (`YYYY-MM-DD`).
        start: String,
        /// End of the rejected range (`YYYY-MM-DD`).
        end: String,
    },

    /// The holiday provider has no rules for the requested country.
    #[error("unsupported country: {0:?}")]
    UnsupportedCountry(String),

    /// A month number outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: u8,
    },

    /// Date construction, parsing or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout paycal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pc_core::{ensure, errors::Error};
/// fn padding(months: u8) -> pc_core::errors::Result<u8> {
///     ensure!(months > 0, "padding must be positive, got {months}");
///     Ok(months)
/// }
/// assert!(padding(13).is_ok());
/// assert!(matches!(padding(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pc_core::fail;
/// fn always_err() -> pc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let err = Error::InvalidRange {
            start: "2022-03-11".into(),
            end: "2022-03-10".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2022-03-11 is after end 2022-03-10"
        );
    }

    #[test]
    fn unsupported_country_message() {
        let err = Error::UnsupportedCountry("Atlantis".into());
        assert_eq!(err.to_string(), "unsupported country: \"Atlantis\"");
    }

    #[test]
    fn invalid_month_message() {
        let err = Error::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn ensure_macro_returns_precondition() {
        fn check(x: i32) -> Result<i32> {
            ensure!(x >= 0, "x must be non-negative, got {x}");
            Ok(x)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(-1),
            Err(Error::Precondition("x must be non-negative, got -1".into()))
        );
    }

    #[test]
    fn fail_macro_returns_runtime() {
        fn boom() -> Result<()> {
            fail!("boom {}", 42);
        }
        assert_eq!(boom(), Err(Error::Runtime("boom 42".into())));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
