//! General error types for the parser

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser stages
pub type ParserResult<T> = Result<T, ParserError>;

/// A global enumeration of error codes
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorDetails {
    /// Nothing but whitespace (or nothing at all) in the input
    ZeroLengthInput,
    /// The input ran out whilst the machine still expected characters
    EndOfInput,
    /// The supplied path couldn't be opened for reading
    InvalidFile,
    /// A character that has no business being where it is
    InvalidCharacter(char),
    /// A `true`/`false`/`null` sequence that went off the rails
    InvalidLiteral(String),
    /// A number that violates the grammar (leading zeros, bare fraction etc...)
    InvalidNumericRepresentation(String),
    /// An integer literal whose magnitude doesn't fit within an i64
    IntegerOutOfRange(String),
    /// A backslash followed by something unexpected
    InvalidEscapeSequence(char),
    /// A \uXXXX escape that is either malformed or outside the supported range
    InvalidUnicodeEscapeSequence(u32),
    /// A raw control character inside a string literal
    UnescapedControlCharacter(char),
    /// The closing double quote never showed up
    UnterminatedString,
    /// An object key (quoted string) was expected
    KeyExpected,
    /// The colon between a key and its value was expected
    PairExpected,
    /// Non-whitespace input remaining after the root value closed
    TrailingCharacters(char),
}

impl Display for ParserErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLengthInput => write!(f, "input is empty or contains only whitespace"),
            Self::EndOfInput => write!(f, "unexpected end of input"),
            Self::InvalidFile => write!(f, "failed to open the input file"),
            Self::InvalidCharacter(c) => write!(f, "invalid character '{}'", c.escape_default()),
            Self::InvalidLiteral(s) => write!(f, "invalid literal starting with \"{}\"", s),
            Self::InvalidNumericRepresentation(s) => write!(f, "invalid number \"{}\"", s),
            Self::IntegerOutOfRange(s) => write!(f, "integer \"{}\" out of i64 range", s),
            Self::InvalidEscapeSequence(c) => {
                write!(f, "invalid escape sequence '\\{}'", c.escape_default())
            }
            Self::InvalidUnicodeEscapeSequence(cp) => {
                write!(f, "unsupported unicode escape \\u{:04x}", cp)
            }
            Self::UnescapedControlCharacter(c) => {
                write!(f, "unescaped control character {:#04x} in string", *c as u32)
            }
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::KeyExpected => write!(f, "expected a quoted object key"),
            Self::PairExpected => write!(f, "expected ':' after object key"),
            Self::TrailingCharacters(c) => {
                write!(f, "trailing character '{}' after root value", c.escape_default())
            }
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// The global error code for the error
    pub details: ParserErrorDetails,
    /// Optional parser coordinates
    pub coords: Option<Coords>,
    /// Name of the machine state at the time of the failure
    pub state: &'static str,
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(f, "{} at {} (state: {})", self.details, coords, self.state),
            None => write!(f, "{} (state: {})", self.details, self.state),
        }
    }
}

impl std::error::Error for ParserError {}

/// Convenience macro for producing `Err(ParserError)` values with optional coordinates
#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr, $state: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: Some($coords),
            state: $state,
        })
    };
    ($details: expr, $state: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: None,
            state: $state,
        })
    };
}
