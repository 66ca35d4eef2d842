//! URI headers.

use std::fmt;

use crate::constants::HEADER_SEPARATOR;

/// Headers of a URI (`?name=value&name=value`).
///
/// Each header is kept as its raw text. Order and duplicates are preserved.
///
/// # Examples
///
/// ```
/// use sip_address::UriHeaders;
///
/// let headers = UriHeaders::parse("x=1&x=1&y=2");
/// assert_eq!(headers.as_slice(), ["x=1", "x=1", "y=2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UriHeaders(Vec<String>);

impl UriHeaders {
    /// Creates an empty header list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits the text after `?` on `&`. Empty input yields no headers.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::new();
        }
        Self(input.split(HEADER_SEPARATOR).map(str::to_string).collect())
    }

    /// Appends a raw header.
    pub fn push(&mut self, header: impl Into<String>) {
        self.0.push(header.into());
    }

    /// Returns the headers as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns an iterator over the headers.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for UriHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, header) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{HEADER_SEPARATOR}")?;
            }
            write!(f, "{header}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for UriHeaders {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
