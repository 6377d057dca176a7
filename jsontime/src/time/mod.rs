use chrono::Utc;

pub const NANO_PER_SEC: u32 = 1_000_000_000;

pub type DateTimeUtc = chrono::DateTime<Utc>;
pub mod parser;
pub use parser::{ParsedTimestamp, Precision, parse_json_token, parse_timestamp};
pub mod resolution;
pub use resolution::{Microsecond, Millisecond, Nanosecond, Resolution, Second};
pub mod policy;
pub use policy::{Policy, RoundHalfUp, Truncate};
pub mod json_time;
pub use json_time::{
    JsonTime, JsonTimeMs, JsonTimeNs, JsonTimeSec, JsonTimeUs, MsRes, NsRes, SecRes, UsRes,
};

/// Re-export commonly used time types
pub mod prelude {
    pub use super::{
        json_time::{
            JsonTime, JsonTimeMs, JsonTimeNs, JsonTimeSec, JsonTimeUs, MsRes, NsRes, SecRes, UsRes,
        },
        parser::Precision,
        policy::{RoundHalfUp, Truncate},
        resolution::{Microsecond, Millisecond, Nanosecond, Second},
    };
}
