//! Error types for lunarcal-rs.
//!
//! The whole workspace reports failures through a single `thiserror`-derived
//! enum. Every variant reflects invalid input or an unsupported date range;
//! none of them is transient, so callers never retry.

use thiserror::Error;

/// The top-level error type used throughout lunarcal-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A birth year later than the year an anniversary was requested for.
    #[error("birth year {birth} is later than target year {target}")]
    OutOfRange {
        /// Lunar calendar-field year of the birth date.
        birth: u16,
        /// Requested target solar year.
        target: u16,
    },

    /// A date outside the range of the lunar conversion table.
    ///
    /// Propagated unchanged to the caller; conversions never extrapolate
    /// beyond their table.
    #[error("date outside conversion table range: {0}")]
    ConverterRange(String),

    /// A duration literal that cannot be parsed.
    #[error("malformed duration: {0}")]
    MalformedDuration(String),

    /// Invalid calendar fields or date arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout lunarcal-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lc_core::ensure;
/// fn span(years: u16) -> lc_core::Result<u16> {
///     ensure!(years <= 500, "span of {years} years exceeds the cap");
///     Ok(years)
/// }
/// assert!(span(10).is_ok());
/// assert!(span(501).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
