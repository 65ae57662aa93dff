// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of wire-format fields.
//!
//! Dates travel as `YYYY-MM-DD` strings and times as `HH:MM` strings. Each
//! failure names the request field it came from.

use gymshift_domain::{parse_date, parse_time};
use std::collections::BTreeSet;
use thiserror::Error;
use time::{Date, Time};

/// Input parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The value is not a calendar date.
    #[error("Expected a date in YYYY-MM-DD form, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    /// The value is not a time of day.
    #[error("Expected a time in HH:MM form, got '{value}'")]
    InvalidTime { field: &'static str, value: String },

    /// A holiday scope is missing the qualifier it needs.
    #[error("A {scope} holiday requires {field}")]
    MissingScopeQualifier {
        field: &'static str,
        scope: &'static str,
    },
}

impl InputError {
    /// Returns the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidDate { field, .. }
            | Self::InvalidTime { field, .. }
            | Self::MissingScopeQualifier { field, .. } => *field,
        }
    }
}

/// Parses a `YYYY-MM-DD` request field.
///
/// # Errors
///
/// Returns `InputError::InvalidDate` naming `field` if the value does not parse.
pub fn parse_date_field(field: &'static str, value: &str) -> Result<Date, InputError> {
    parse_date(value.trim()).map_err(|_| InputError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses an `HH:MM` request field.
///
/// # Errors
///
/// Returns `InputError::InvalidTime` naming `field` if the value does not parse.
pub fn parse_time_field(field: &'static str, value: &str) -> Result<Time, InputError> {
    parse_time(value.trim()).map_err(|_| InputError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Parses a list of dates into a set, collapsing repeats.
///
/// # Errors
///
/// Returns the first value that does not parse.
pub fn parse_date_set(field: &'static str, values: &[String]) -> Result<BTreeSet<Date>, InputError> {
    values
        .iter()
        .map(|value| parse_date_field(field, value))
        .collect()
}
