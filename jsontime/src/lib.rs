//! Fixed-resolution UTC timestamps for JSON documents.
//!
//! Every type renders one RFC 3339 layout with a `Z` suffix and a fixed
//! number of fractional digits, and decodes any of the four layouts
//! (0, 3, 6 or 9 fractional digits), bringing the value to its own
//! resolution by truncation ([`JsonTimeSec`], [`JsonTimeMs`], [`JsonTimeUs`],
//! [`JsonTimeNs`]) or by rounding half-up ([`SecRes`], [`MsRes`], [`UsRes`],
//! [`NsRes`]). The unset value is the empty string.
//!
//! ```rust
//! use jsontime::{JsonTimeMs, MsRes};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Trade {
//!     at: MsRes,
//!     #[serde(default, skip_serializing_if = "JsonTimeMs::is_zero")]
//!     settled: JsonTimeMs,
//! }
//!
//! let trade: Trade = serde_json::from_str(r#"{"at":"2024-07-22T15:05:52.338500008Z"}"#).unwrap();
//! assert_eq!(trade.at.to_string(), "2024-07-22T15:05:52.339Z");
//! assert_eq!(
//!     serde_json::to_string(&trade).unwrap(),
//!     r#"{"at":"2024-07-22T15:05:52.339Z"}"#
//! );
//! ```

pub mod error;
pub mod result;
pub mod time;

pub use error::{ParseError, ParseErrorKind};
pub use result::ParseResult;
pub use time::{
    DateTimeUtc, JsonTime, JsonTimeMs, JsonTimeNs, JsonTimeSec, JsonTimeUs, MsRes, NsRes,
    Precision, SecRes, UsRes,
};

/// Encode/decode hooks on raw JSON string tokens, quotes included.
pub trait TimestampCodec: Sized {
    /// Layout written by [`TimestampCodec::encode_token`]
    const PRECISION: Precision;

    /// Decode a quoted token into `self`. The empty token `""` leaves `self`
    /// unchanged.
    fn decode_token(&mut self, token: &str) -> ParseResult<()>;

    /// Encode `self` as a quoted token, `""` when unset.
    fn encode_token(&self) -> String;
}
