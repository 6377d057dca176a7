use thiserror::Error;

/// Broad category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The text does not have the length of any known timestamp form.
    Format,
    /// A second-resolution input was too short to hold a timestamp.
    Malformed,
    /// The length matched a known form but the date/time fields did not.
    Grammar,
}

/// A timestamp parsing error, carrying the offending text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Length does not select any of the recognized fixed-width forms.
    #[error("unrecognized timestamp format in {text:?}")]
    UnrecognizedFormat { text: String },

    /// Non-empty input shorter than the whole-second form.
    #[error("malformed second timestamp {text:?}")]
    MalformedTimestamp { text: String },

    /// A character does not fit the fixed layout at this position.
    #[error("invalid character {value:?} at position {position} in timestamp {text:?}")]
    InvalidCharAt {
        text: String,
        value: char,
        position: usize,
    },

    /// The fields are well placed but do not form a valid date or time.
    #[error("invalid timestamp {text:?}: {source}")]
    Grammar {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl ParseError {
    pub fn unrecognized_format(text: impl Into<String>) -> Self {
        Self::UnrecognizedFormat { text: text.into() }
    }

    pub fn malformed(text: impl Into<String>) -> Self {
        Self::MalformedTimestamp { text: text.into() }
    }

    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnrecognizedFormat { .. } => ParseErrorKind::Format,
            Self::MalformedTimestamp { .. } => ParseErrorKind::Malformed,
            Self::InvalidCharAt { .. } | Self::Grammar { .. } => ParseErrorKind::Grammar,
        }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        match self {
            Self::UnrecognizedFormat { text }
            | Self::MalformedTimestamp { text }
            | Self::InvalidCharAt { text, .. }
            | Self::Grammar { text, .. } => text,
        }
    }
}
