//! Resolver configuration.
//!
//! The layout used to read `xsd:dateTime` literals is a field of
//! [`ResolverConfig`] rather than process-wide state. Every resolution reads
//! the config it was handed, so changing the layout only affects terms
//! resolved afterwards with the changed value; terms already produced keep
//! whatever they were parsed as.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::resolver::TermResolver;

/// Layout of `xsd:dateTime` lexical values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// RFC 3339, e.g. `2014-07-21T04:00:40+02:00`
    #[default]
    Rfc3339,
    /// A chrono `strftime` pattern, e.g. `%Y-%m-%dT%H:%M:%S%:z`.
    /// Patterns without an offset are read as UTC, and patterns without a
    /// time of day as midnight.
    Pattern(String),
}

impl DateFormat {
    /// A strftime pattern layout
    pub fn pattern(pattern: impl Into<String>) -> Self {
        DateFormat::Pattern(pattern.into())
    }

    /// Parses `value`, returning `None` when it does not match the layout
    pub fn parse(&self, value: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(value).ok(),
            DateFormat::Pattern(pattern) => DateTime::parse_from_str(value, pattern)
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(value, pattern).ok().map(utc))
                // date-only layouts read as midnight UTC
                .or_else(|| {
                    NaiveDate::parse_from_str(value, pattern)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(utc)
                }),
        }
    }
}

fn utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    let utc: DateTime<Utc> = Utc.from_utc_datetime(&naive);
    utc.into()
}

/// Settings consulted while turning bindings into terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Layout of `xsd:dateTime` values
    pub date_format: DateFormat,
    /// Coerce `literal` bindings that carry a `datatype` (SPARQL 1.1 style)
    /// the same way as `typed-literal` bindings. Off by default: plain
    /// literals are typed `xsd:string` regardless of any datatype field.
    pub literal_datatypes: bool,
}

impl ResolverConfig {
    /// Same as [`ResolverConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the dateTime layout
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Enables or disables datatype coercion for plain literals
    pub fn with_literal_datatypes(mut self, enabled: bool) -> Self {
        self.literal_datatypes = enabled;
        self
    }

    /// A resolver borrowing this config
    pub fn resolver(&self) -> TermResolver<'_> {
        TermResolver::new(self)
    }
}
