//! Read entities definitions.

pub mod house;
pub mod report;
pub mod user;

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

pub use self::report::Report;

/// Error of building a search filter out of a key and a value.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum FilterError {
    /// Search key is not among the known ones.
    #[display("unknown search key `{_0}`")]
    UnknownKey(#[error(not(source))] String),

    /// Value cannot be parsed into the type the key searches by.
    #[display("invalid `{key}` value: {reason}")]
    InvalidValue {
        /// Search key the value was provided for.
        key: &'static str,

        /// Reason of the value being invalid.
        reason: String,
    },
}

/// Parses the `value` searched by the provided `key`.
fn parse_value<T>(key: &'static str, value: &str) -> Result<T, FilterError>
where
    T: FromStr<Err: fmt::Display>,
{
    value.parse().map_err(|e: T::Err| FilterError::InvalidValue {
        key,
        reason: e.to_string(),
    })
}
