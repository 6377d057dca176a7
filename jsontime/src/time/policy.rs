use crate::time::{DateTimeUtc, parser::Precision};
use chrono::{TimeDelta, Timelike};

mod sealed {
    pub trait Sealed {}
}

/// How an instant is brought down to a [`Precision`].
pub trait Policy: sealed::Sealed + Copy + Default + Eq + Ord + std::hash::Hash {
    fn apply(instant: DateTimeUtc, precision: Precision) -> DateTimeUtc;
}

/// Drop everything below the unit (floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Truncate;

/// Round to the nearest unit, ties towards the later instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundHalfUp;

impl sealed::Sealed for Truncate {}
impl sealed::Sealed for RoundHalfUp {}

impl Policy for Truncate {
    #[inline]
    fn apply(instant: DateTimeUtc, precision: Precision) -> DateTimeUtc {
        truncate(instant, precision.unit_nanos())
    }
}

impl Policy for RoundHalfUp {
    #[inline]
    fn apply(instant: DateTimeUtc, precision: Precision) -> DateTimeUtc {
        let unit = precision.unit_nanos();
        if unit == 1 {
            return instant;
        }

        let bias = TimeDelta::nanoseconds(i64::from(unit / 2));
        // Only the last representable half unit can overflow; floor it instead.
        instant
            .checked_add_signed(bias)
            .map_or_else(|| truncate(instant, unit), |biased| truncate(biased, unit))
    }
}

/// Floor the sub-second part to a multiple of `unit` nanoseconds.
///
/// Every unit divides a second, so second boundaries stay aligned and the
/// result is a floor for instants before the epoch as well.
#[inline]
fn truncate(instant: DateTimeUtc, unit: u32) -> DateTimeUtc {
    let nanos = instant.nanosecond();
    instant
        .with_nanosecond(nanos - nanos % unit)
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn at(nanos: u32) -> DateTimeUtc {
        Utc.with_ymd_and_hms(2024, 7, 22, 15, 5, 52)
            .unwrap()
            .with_nanosecond(nanos)
            .unwrap()
    }

    #[rstest]
    #[case(Precision::Seconds, 838_001_008, 0)]
    #[case(Precision::Millis, 338_500_008, 338_000_000)]
    #[case(Precision::Micros, 338_001_508, 338_001_000)]
    #[case(Precision::Nanos, 338_001_008, 338_001_008)]
    fn test_truncate(#[case] precision: Precision, #[case] input: u32, #[case] expected: u32) {
        assert_eq!(Truncate::apply(at(input), precision), at(expected));
    }

    #[rstest]
    #[case(Precision::Millis, 338_500_008, 339_000_000)]
    #[case(Precision::Millis, 338_499_999, 338_000_000)]
    #[case(Precision::Millis, 338_500_000, 339_000_000)]
    #[case(Precision::Micros, 338_001_508, 338_002_000)]
    #[case(Precision::Micros, 338_001_499, 338_001_000)]
    #[case(Precision::Nanos, 338_001_008, 338_001_008)]
    fn test_round_half_up(#[case] precision: Precision, #[case] input: u32, #[case] expected: u32) {
        assert_eq!(RoundHalfUp::apply(at(input), precision), at(expected));
    }

    #[test]
    fn test_round_half_up_carries_into_next_second() {
        let rounded = RoundHalfUp::apply(at(838_001_008), Precision::Seconds);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2024, 7, 22, 15, 5, 53).unwrap());

        let rounded = RoundHalfUp::apply(at(999_600_000), Precision::Millis);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2024, 7, 22, 15, 5, 53).unwrap());
    }

    #[test]
    fn test_round_half_up_across_day_boundary() {
        let instant = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(500_000_000)
            .unwrap();
        let rounded = RoundHalfUp::apply(instant, Precision::Seconds);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_truncate_before_epoch_floors() {
        let instant = Utc
            .with_ymd_and_hms(1969, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(750_000_000)
            .unwrap();
        let truncated = Truncate::apply(instant, Precision::Seconds);
        assert_eq!(
            truncated,
            Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_round_half_up_at_max_does_not_overflow() {
        let max = DateTimeUtc::MAX_UTC;
        let rounded = RoundHalfUp::apply(max, Precision::Seconds);
        assert_eq!(rounded, max.with_nanosecond(0).unwrap());
    }
}
