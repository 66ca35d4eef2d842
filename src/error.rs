//! Error types for SIP URI and address parsing.

use std::fmt;

/// Errors that can occur when parsing a URI or an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// None of the address forms matched the input
    NoGrammarMatch,
    /// The URI grammar did not match
    InvalidUri(UriError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::NoGrammarMatch => write!(
                f,
                "expected `name <uri>`, `\"name\" <uri>` or a bare URI"
            ),
            ParseErrorKind::InvalidUri(e) => write!(f, "invalid URI: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidUri(e) => Some(e),
            _ => None,
        }
    }
}

/// Reasons the URI grammar stopped matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// Missing or malformed scheme
    InvalidScheme {
        /// The text before the first ':', if any
        found: Option<String>,
    },
    /// A ':' after the host is not followed by port digits
    MissingPort {
        /// Byte offset of the ':'
        position: usize,
    },
    /// Unexpected character at position
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Byte offset in the input
        position: usize,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { found } => match found {
                Some(s) => write!(
                    f,
                    "invalid scheme '{s}'; expected a letter followed by letters, digits, '+', '-' or '.'"
                ),
                None => write!(f, "missing scheme; URI must start with '<scheme>:'"),
            },
            Self::MissingPort { position } => {
                write!(f, "':' at position {position} is not followed by a port number")
            }
            Self::UnexpectedChar { char, position } => {
                write!(f, "unexpected character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for UriError {}

impl UriError {
    /// Shifts the recorded position by `offset` bytes, for errors found in a
    /// suffix of the input.
    pub(crate) fn offset_by(self, offset: usize) -> Self {
        match self {
            Self::MissingPort { position } => Self::MissingPort {
                position: position + offset,
            },
            Self::UnexpectedChar { char, position } => Self::UnexpectedChar {
                char,
                position: position + offset,
            },
            other @ Self::InvalidScheme { .. } => other,
        }
    }
}

/// Errors that can occur when building a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The scheme does not match the scheme grammar
    InvalidScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// A password was set without a user
    PasswordWithoutUser,
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { scheme } => write!(
                f,
                "invalid scheme '{scheme}'; expected a letter followed by letters, digits, '+', '-' or '.'"
            ),
            Self::PasswordWithoutUser => {
                write!(f, "password requires a user")
            }
        }
    }
}

impl std::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = ParseError::new("bogus", ParseErrorKind::NoGrammarMatch);
        assert!(err.to_string().starts_with("failed to parse 'bogus': "));
    }

    #[test]
    fn invalid_uri_exposes_source() {
        use std::error::Error;

        let err = ParseError::new(
            "sip:host:",
            ParseErrorKind::InvalidUri(UriError::MissingPort { position: 8 }),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("position 8"));
    }

    #[test]
    fn offset_by_shifts_positions_only() {
        assert_eq!(
            UriError::MissingPort { position: 4 }.offset_by(10),
            UriError::MissingPort { position: 14 }
        );
        assert_eq!(
            UriError::UnexpectedChar { char: '>', position: 0 }.offset_by(3),
            UriError::UnexpectedChar { char: '>', position: 3 }
        );

        let scheme = UriError::InvalidScheme { found: None };
        assert_eq!(scheme.clone().offset_by(7), scheme);
    }
}
