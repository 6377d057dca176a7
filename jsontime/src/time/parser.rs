//! Fixed-width RFC 3339 timestamp parser.
//!
//! Exactly four layouts are recognized, and the layout is chosen only by the
//! length of the input:
//!
//! | token (quoted) | payload | layout                            |
//! |----------------|---------|-----------------------------------|
//! | 22             | 20      | `YYYY-MM-DDTHH:MM:SSZ`            |
//! | 26             | 24      | `YYYY-MM-DDTHH:MM:SS.mmmZ`        |
//! | 29             | 27      | `YYYY-MM-DDTHH:MM:SS.uuuuuuZ`     |
//! | 32             | 30      | `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`  |
//!
//! The parsed instant keeps the fractional digits exactly as supplied;
//! truncation and rounding belong to [`super::Policy`].

use crate::{
    error::ParseError,
    result::ParseResult,
    time::{DateTimeUtc, NANO_PER_SEC},
};
use chrono::{NaiveDateTime, SecondsFormat};

/// Length of `YYYY-MM-DDTHH:MM:SS`, shared by every layout.
const DATE_TIME_LEN: usize = 19;

/// Offset of the tens digit of the seconds field.
const SECOND_TENS: usize = 17;

/// Fractional precision implied by the length of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Seconds,
        Precision::Millis,
        Precision::Micros,
        Precision::Nanos,
    ];

    /// Number of digits after the decimal point.
    #[inline]
    pub const fn fraction_digits(self) -> usize {
        match self {
            Precision::Seconds => 0,
            Precision::Millis => 3,
            Precision::Micros => 6,
            Precision::Nanos => 9,
        }
    }

    /// Length of one resolution unit in nanoseconds.
    #[inline]
    pub const fn unit_nanos(self) -> u32 {
        match self {
            Precision::Seconds => NANO_PER_SEC,
            Precision::Millis => 1_000_000,
            Precision::Micros => 1_000,
            Precision::Nanos => 1,
        }
    }

    /// Length of the unquoted timestamp text.
    #[inline]
    pub const fn payload_len(self) -> usize {
        match self.fraction_digits() {
            0 => DATE_TIME_LEN + 1,
            digits => DATE_TIME_LEN + 1 + digits + 1,
        }
    }

    /// Length of the JSON string token, quotes included.
    #[inline]
    pub const fn token_len(self) -> usize {
        self.payload_len() + 2
    }

    #[inline]
    pub const fn seconds_format(self) -> SecondsFormat {
        match self {
            Precision::Seconds => SecondsFormat::Secs,
            Precision::Millis => SecondsFormat::Millis,
            Precision::Micros => SecondsFormat::Micros,
            Precision::Nanos => SecondsFormat::Nanos,
        }
    }

    pub fn from_payload_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.payload_len() == len)
    }

    const fn chrono_format(self) -> &'static str {
        match self {
            Precision::Seconds => "%Y-%m-%dT%H:%M:%SZ",
            Precision::Millis => "%Y-%m-%dT%H:%M:%S%.3fZ",
            Precision::Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            Precision::Nanos => "%Y-%m-%dT%H:%M:%S%.9fZ",
        }
    }
}

/// An instant together with the precision it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    pub instant: DateTimeUtc,
    pub precision: Precision,
}

/// Parse a JSON string token, surrounding quotes included.
pub fn parse_json_token(token: &str) -> ParseResult<ParsedTimestamp> {
    parse_timestamp(unquote(token)?)
}

/// Parse the unquoted text of a timestamp.
pub fn parse_timestamp(text: &str) -> ParseResult<ParsedTimestamp> {
    let Some(precision) = Precision::from_payload_len(text.len()) else {
        tracing::trace!(text, len = text.len(), "timestamp length matches no known layout");
        return Err(ParseError::unrecognized_format(text));
    };

    check_layout(text, precision)?;

    NaiveDateTime::parse_from_str(text, precision.chrono_format())
        .map(|naive| ParsedTimestamp {
            instant: naive.and_utc(),
            precision,
        })
        .map_err(|source| {
            tracing::trace!(text, ?precision, %source, "timestamp fields rejected");
            ParseError::Grammar {
                text: text.to_string(),
                source,
            }
        })
}

/// Strip the quotes of a JSON string token.
pub(crate) fn unquote(token: &str) -> ParseResult<&str> {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ParseError::unrecognized_format(token))
}

/// Every byte must be a digit except the fixed separators, the optional
/// decimal point and the trailing `Z`. The tens digit of the seconds stays
/// below 6, so chrono never sees a leap second.
fn check_layout(text: &str, precision: Precision) -> ParseResult<()> {
    let bytes = text.as_bytes();
    let last = bytes.len() - 1;
    let has_fraction = precision.fraction_digits() > 0;

    for (position, &value) in bytes.iter().enumerate() {
        let fits = match position {
            4 | 7 => value == b'-',
            10 => value == b'T',
            13 | 16 => value == b':',
            SECOND_TENS => (b'0'..=b'5').contains(&value),
            DATE_TIME_LEN if has_fraction => value == b'.',
            p if p == last => value == b'Z',
            _ => value.is_ascii_digit(),
        };

        if !fits {
            // All bytes before `position` are ASCII, so it is a char boundary.
            let value = text[position..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            tracing::trace!(text, position, "unexpected character in timestamp");
            return Err(ParseError::InvalidCharAt {
                text: text.to_string(),
                value,
                position,
            });
        }
    }

    Ok(())
}
