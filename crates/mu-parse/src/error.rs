//! Parse errors.

use thiserror::Error;

/// Which grammar rule gave up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("symbol not found")]
    SymbolNotFound,

    #[error("prefix not found")]
    PrefixNotFound,

    #[error("{0:?} not found")]
    RuneNotFound(char),

    #[error("invalid exponent {0:?}")]
    InvalidExponent(String),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("unparsed text")]
    UnparsedText,
}

/// A failed parse, with the text split at the offset where parsing stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse failed at: {consumed:?} . {remainder:?}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset into the unit text.
    pub offset: usize,
    pub consumed: String,
    pub remainder: String,
}

impl ParseError {
    pub fn new(text: &str, offset: usize, kind: ParseErrorKind) -> Self {
        let (consumed, remainder) = text.split_at(offset);
        Self {
            kind,
            offset,
            consumed: consumed.to_string(),
            remainder: remainder.to_string(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Rule-level failure carried up the recursive descent before the input
/// text is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl Failure {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn into_error(self, text: &str) -> ParseError {
        ParseError::new(text, self.offset, self.kind)
    }
}
