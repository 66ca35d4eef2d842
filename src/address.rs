//! Display-name-qualified address (`name-addr`).

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::{self, AddressForm};
use crate::options::SerializeOptions;
use crate::uri::Uri;

/// A display name paired with a URI, as found in `From`, `To` and
/// `Contact` header values.
///
/// Three forms are recognized, tried in order:
///
/// ```text
/// John Doe <sip:john@example.org>
/// "John Doe" <sip:john@example.org>
/// sip:john@example.org
/// ```
///
/// A display name always serializes quoted. The URI serializes bare unless
/// `must_quote` is set, in which case it is wrapped in `<...>`.
///
/// # Examples
///
/// ```
/// use sip_address::Address;
///
/// let addr = Address::parse("John Doe <sip:john@example.org>").unwrap();
/// assert_eq!(addr.display_name, "John Doe");
/// assert_eq!(addr.to_string(), "\"John Doe\" sip:john@example.org");
///
/// let quoted = Address::parse("\"John Doe\" <sip:john@example.org>").unwrap();
/// assert_eq!(addr.to_string(), quoted.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Display name, without quotes; may be empty
    pub display_name: String,
    /// The URI, if any
    pub uri: Option<Uri>,
    /// Wrap the URI in angle brackets on serialization
    pub must_quote: bool,
}

/// The result of [`Address::parse_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// The parsed address
    pub address: Address,
    /// Which address form matched
    pub form: AddressForm,
    /// Bytes of input covered by the match
    pub consumed: usize,
}

impl Address {
    /// Creates an address for `uri` with no display name.
    #[must_use]
    pub fn new(uri: Uri) -> Self {
        Self {
            display_name: String::new(),
            uri: Some(uri),
            must_quote: false,
        }
    }

    /// Returns this address with the given display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Returns this address with `must_quote` set.
    #[must_use]
    pub fn with_must_quote(mut self, must_quote: bool) -> Self {
        self.must_quote = must_quote;
        self
    }

    /// Parses an address from the start of `input`.
    ///
    /// Text after the match, such as `;tag=...` header parameters, is
    /// ignored. Use [`Address::parse_prefix`] to learn how much was read.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty, no address form matches,
    /// or the captured URI does not parse.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_prefix(input).map(|parsed| parsed.address)
    }

    /// Parses an address from the start of `input`, reporting which form
    /// matched and how many bytes it covered.
    ///
    /// # Errors
    ///
    /// Same as [`Address::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sip_address::{Address, AddressForm};
    ///
    /// let input = "<sip:alice@example.org>;tag=1928301774";
    /// let parsed = Address::parse_prefix(input).unwrap();
    /// assert_eq!(parsed.form, AddressForm::NameAddr);
    /// assert_eq!(&input[parsed.consumed..], ";tag=1928301774");
    /// ```
    pub fn parse_prefix(input: &str) -> Result<ParsedAddress, ParseError> {
        if input.is_empty() {
            return Err(ParseError::new(input, ParseErrorKind::Empty));
        }

        let Some(m) = grammar::match_address(input) else {
            tracing::trace!(input, "no address form matched");
            return Err(ParseError::new(input, ParseErrorKind::NoGrammarMatch));
        };

        let uri = Uri::parse_inner(m.uri.trim()).map_err(|e| {
            tracing::trace!(input, form = ?m.form, error = %e, "address URI did not parse");
            ParseError::new(input, ParseErrorKind::InvalidUri(e))
        })?;

        Ok(ParsedAddress {
            address: Self {
                display_name: m.display_name.trim().to_string(),
                uri: Some(uri),
                must_quote: false,
            },
            form: m.form,
            consumed: m.consumed,
        })
    }

    /// Parses `input` into `self`, returning the number of bytes consumed.
    ///
    /// Returns 0 if nothing was parsed, in which case `self` is left
    /// untouched. On success the display name and URI are replaced;
    /// `must_quote` keeps its value.
    pub fn loads(&mut self, input: &str) -> usize {
        match Self::parse_prefix(input) {
            Ok(parsed) => {
                self.display_name = parsed.address.display_name;
                self.uri = parsed.address.uri;
                parsed.consumed
            }
            Err(_) => 0,
        }
    }

    /// Returns the URI if it is present and set.
    #[must_use]
    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref().filter(|uri| !uri.is_empty())
    }

    /// Serializes with default options.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    /// Serializes with the given options.
    ///
    /// Without a URI only the quoted display name is written, or nothing if
    /// the display name is empty too.
    #[must_use]
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let uri = self.uri();
        let mut result = String::new();

        if !self.display_name.is_empty() {
            result.push('"');
            result.push_str(&self.display_name);
            result.push('"');
            if uri.is_some() {
                result.push(' ');
            }
        }

        let Some(uri) = uri else {
            return result;
        };

        if self.must_quote {
            result.push('<');
            result.push_str(&uri.serialize_with(options));
            result.push('>');
        } else {
            result.push_str(&uri.serialize_with(options));
        }

        result
    }
}

impl From<Uri> for Address {
    fn from(uri: Uri) -> Self {
        Self::new(uri)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
