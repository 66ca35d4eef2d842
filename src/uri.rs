//! SIP-style URI type.

use std::fmt;
use std::str::FromStr;

use crate::constants::{COLON, HEADERS_DELIMITER, PARAM_DELIMITER, USERINFO_TERMINATOR};
use crate::error::{ParseError, ParseErrorKind, UriError};
use crate::grammar;
use crate::headers::UriHeaders;
use crate::options::SerializeOptions;
use crate::params::UriParams;
use crate::port::Port;

/// A parsed SIP-style URI.
///
/// # Structure
///
/// ```text
/// scheme ":" [ user [ ":" password ] "@" ] host [ ":" port ] [ ";" params ] [ "?" headers ]
/// ```
///
/// Fields are public for programmatic construction. A URI with an empty
/// `scheme` is the unset value and serializes as the empty string.
///
/// # Examples
///
/// ```
/// use sip_address::{Port, Uri};
///
/// let uri = Uri::parse("sip:foo:bar@example.org:5060;transport=udp?subject=hi").unwrap();
/// assert_eq!(uri.scheme, "sip");
/// assert_eq!(uri.user.as_deref(), Some("foo"));
/// assert_eq!(uri.password.as_deref(), Some("bar"));
/// assert_eq!(uri.host, "example.org");
/// assert_eq!(uri.port, Some(Port::Numeric(5060)));
/// assert_eq!(uri.params.get("transport"), Some("udp"));
/// assert_eq!(uri.headers.len(), 1);
/// assert_eq!(uri.to_string(), "sip:foo:bar@example.org:5060;transport=udp?subject=hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Uri {
    /// URI scheme, e.g. `sip`; empty when unset
    pub scheme: String,
    /// User part of the userinfo
    pub user: Option<String>,
    /// Password part of the userinfo; only written when `user` is set
    pub password: Option<String>,
    /// Host; may be empty
    pub host: String,
    /// Port; only written when `host` is non-empty, so a port without a
    /// host does not survive serialization
    pub port: Option<Port>,
    /// `;`-delimited parameters
    pub params: UriParams,
    /// `&`-delimited raw headers
    pub headers: UriHeaders,
}

impl Uri {
    /// Creates an empty, unset URI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URI. The whole input must match.
    ///
    /// A port too large for `u32` is kept as [`Port::Raw`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The scheme is missing or malformed
    /// - A `:` after the host is not followed by digits
    /// - Any text remains after the grammar stops matching
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::new(input, ParseErrorKind::Empty));
        }

        Self::parse_inner(input).map_err(|e| {
            tracing::trace!(input, error = %e, "no URI grammar match");
            ParseError::new(input, ParseErrorKind::InvalidUri(e))
        })
    }

    /// Parses `input` into `self`, returning the number of bytes consumed.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Uri::parse`].
    pub fn loads(&mut self, input: &str) -> Result<usize, ParseError> {
        *self = Self::parse(input)?;
        Ok(input.len())
    }

    pub(crate) fn parse_inner(input: &str) -> Result<Self, UriError> {
        let captures = grammar::match_uri(input)?;

        Ok(Self {
            scheme: captures.scheme.to_string(),
            user: captures.user.map(str::to_string),
            password: captures.password.map(str::to_string),
            host: captures.host.to_string(),
            port: captures.port.map(Port::parse),
            params: captures.params.map(UriParams::parse).unwrap_or_default(),
            headers: captures.headers.map(UriHeaders::parse).unwrap_or_default(),
        })
    }

    /// Returns true if no scheme is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Serializes with default options.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    /// Serializes with the given options.
    ///
    /// Empty `user`, `password` and `host` are skipped, as are the port
    /// without a host and the password without a user. A URI without a
    /// scheme serializes as the empty string.
    #[must_use]
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut result = format!("{}{COLON}", self.scheme);

        if let Some(user) = self.user.as_deref().filter(|u| !u.is_empty()) {
            result.push_str(user);
            if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
                result.push(COLON);
                result.push_str(password);
            }
            result.push(USERINFO_TERMINATOR);
        }

        if !self.host.is_empty() {
            result.push_str(&self.host);
            if let Some(port) = &self.port {
                result.push(COLON);
                result.push_str(&port.to_string());
            }
        }

        if !self.params.is_empty() {
            result.push(PARAM_DELIMITER);
            result.push_str(&self.params.join(options.param_separator.as_str()));
        }

        if !self.headers.is_empty() {
            result.push(HEADERS_DELIMITER);
            result.push_str(&self.headers.to_string());
        }

        result
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.serialize_with(&SerializeOptions::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
