use crate::time::parser::Precision;

mod sealed {
    pub trait Sealed {}
}

/// Compile-time resolution of a [`super::JsonTime`].
///
/// Implemented only by the four marker types of this module.
pub trait Resolution: sealed::Sealed + Copy + Default + Eq + Ord + std::hash::Hash {
    const PRECISION: Precision;
}

macro_rules! resolution {
    ($(#[$doc:meta])* $name:ident => $precision:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Resolution for $name {
            const PRECISION: Precision = $precision;
        }
    };
}

resolution!(
    /// Whole seconds, `YYYY-MM-DDTHH:MM:SSZ`.
    Second => Precision::Seconds
);
resolution!(
    /// Milliseconds, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    Millisecond => Precision::Millis
);
resolution!(
    /// Microseconds, `YYYY-MM-DDTHH:MM:SS.uuuuuuZ`.
    Microsecond => Precision::Micros
);
resolution!(
    /// Nanoseconds, `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`.
    Nanosecond => Precision::Nanos
);
