use crate::error::ParseError;

pub type ParseResult<T> = Result<T, ParseError>;
