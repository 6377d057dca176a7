use crate::{
    TimestampCodec,
    error::ParseError,
    result::ParseResult,
    time::{
        DateTimeUtc,
        parser::{self, Precision},
        policy::{Policy, RoundHalfUp, Truncate},
        resolution::{Microsecond, Millisecond, Nanosecond, Resolution, Second},
    },
};
use chrono::{TimeDelta, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
};
use std::{fmt, marker::PhantomData, str::FromStr};

struct JsonTimeVisitor<R, P>(PhantomData<(R, P)>);

impl<'de, R: Resolution, P: Policy> Visitor<'de> for JsonTimeVisitor<R, P> {
    type Value = JsonTime<R, P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "an empty string or a UTC timestamp with {} fractional digits",
            R::PRECISION.fraction_digits()
        )
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        JsonTime::<R, P>::parse(value).map_err(E::custom)
    }
}

/// A UTC timestamp bound to the resolution `R`, brought to it with the
/// policy `P`.
///
/// In JSON it is a string in one of the fixed layouts of [`parser`]; the
/// unset (zero) value is the empty string `""`. Decoding accepts any of the
/// four layouts and applies `P`, encoding always writes the layout of `R`.
///
/// Use one of the aliases rather than naming the markers:
///
/// | resolution   | truncating    | rounding half-up |
/// |--------------|---------------|------------------|
/// | seconds      | [`JsonTimeSec`] | [`SecRes`]     |
/// | milliseconds | [`JsonTimeMs`]  | [`MsRes`]      |
/// | microseconds | [`JsonTimeUs`]  | [`UsRes`]      |
/// | nanoseconds  | [`JsonTimeNs`]  | [`NsRes`]      |
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JsonTime<R, P> {
    instant: Option<DateTimeUtc>,
    _marker: PhantomData<(R, P)>,
}

impl<R: Resolution, P: Policy> JsonTime<R, P> {
    /// The unset value, rendered as `""`.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            instant: None,
            _marker: PhantomData,
        }
    }

    /// Wrap `instant`, truncated or rounded to `R`.
    #[inline]
    pub fn new(instant: DateTimeUtc) -> Self {
        Self {
            instant: Some(P::apply(instant, R::PRECISION)),
            _marker: PhantomData,
        }
    }

    /// The current system time, truncated or rounded to `R`.
    #[inline]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    #[inline]
    pub const fn precision() -> Precision {
        R::PRECISION
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.instant.is_none()
    }

    /// The wrapped instant, `None` for the zero value.
    #[inline]
    pub fn instant(&self) -> Option<DateTimeUtc> {
        self.instant
    }

    /// Canonical text without quotes, empty for the zero value.
    ///
    /// The text parses back to the same value for years 0000 to 9999. Past
    /// that chrono writes a signed year (rounding `9999-12-31T23:59:59.5Z` to
    /// seconds gives `+10000-01-01T00:00:00Z`), which no layout accepts.
    pub fn render(&self) -> String {
        self.instant.map_or_else(String::new, |instant| {
            instant.to_rfc3339_opts(R::PRECISION.seconds_format(), true)
        })
    }

    /// Parse unquoted text; the empty string yields the zero value.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut value = Self::zero();
        value.decode(text)?;
        Ok(value)
    }

    /// Decode unquoted text into `self`.
    ///
    /// The empty string leaves `self` as it is. On error `self` is not
    /// modified.
    pub fn decode(&mut self, text: &str) -> ParseResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        if R::PRECISION == Precision::Seconds && text.len() < Precision::Seconds.payload_len() {
            tracing::trace!(text, "second timestamp shorter than its layout");
            return Err(ParseError::malformed(text));
        }

        let parsed = parser::parse_timestamp(text)?;
        self.instant = Some(P::apply(parsed.instant, R::PRECISION));
        Ok(())
    }

    /// Re-express this value with another resolution and policy.
    pub fn convert<R2: Resolution, P2: Policy>(self) -> JsonTime<R2, P2> {
        self.instant.map_or_else(JsonTime::zero, JsonTime::new)
    }

    /// `self - other`, or `None` if either side is zero.
    pub fn signed_duration_since<R2: Resolution, P2: Policy>(
        &self,
        other: &JsonTime<R2, P2>,
    ) -> Option<TimeDelta> {
        Some(self.instant?.signed_duration_since(other.instant?))
    }
}

impl<R: Resolution, P: Policy> TimestampCodec for JsonTime<R, P> {
    const PRECISION: Precision = R::PRECISION;

    fn decode_token(&mut self, token: &str) -> ParseResult<()> {
        self.decode(parser::unquote(token)?)
    }

    fn encode_token(&self) -> String {
        format!("\"{self}\"")
    }
}

impl<R: Resolution, P: Policy> From<DateTimeUtc> for JsonTime<R, P> {
    #[inline]
    fn from(instant: DateTimeUtc) -> Self {
        Self::new(instant)
    }
}

impl<R: Resolution, P: Policy> FromStr for JsonTime<R, P> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<R: Resolution, P: Policy> fmt::Display for JsonTime<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<R: Resolution, P: Policy> fmt::Debug for JsonTime<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsonTime").field(&self.render()).finish()
    }
}

impl<R: Resolution, P: Policy> Serialize for JsonTime<R, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de, R: Resolution, P: Policy> Deserialize<'de> for JsonTime<R, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(JsonTimeVisitor::<R, P>(PhantomData))
    }
}

pub type JsonTimeSec = JsonTime<Second, Truncate>;
pub type JsonTimeMs = JsonTime<Millisecond, Truncate>;
pub type JsonTimeUs = JsonTime<Microsecond, Truncate>;
/// Keeps the parsed instant as is.
pub type JsonTimeNs = JsonTime<Nanosecond, Truncate>;

pub type SecRes = JsonTime<Second, RoundHalfUp>;
pub type MsRes = JsonTime<Millisecond, RoundHalfUp>;
pub type UsRes = JsonTime<Microsecond, RoundHalfUp>;
/// Keeps the parsed instant as is.
pub type NsRes = JsonTime<Nanosecond, RoundHalfUp>;
