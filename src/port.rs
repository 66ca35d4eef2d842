//! Port of a SIP URI.

use std::fmt;

/// The port of a URI.
///
/// The grammar only admits digits, but a run of digits may still overflow
/// the integer type. Such ports are kept verbatim instead of failing the
/// whole parse.
///
/// # Examples
///
/// ```
/// use sip_address::Port;
///
/// assert_eq!(Port::parse("5060"), Port::Numeric(5060));
/// assert_eq!(
///     Port::parse("99999999999"),
///     Port::Raw("99999999999".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Port {
    /// A port that fits in a `u32`
    Numeric(u32),
    /// A port kept as its source text
    Raw(String),
}

impl Port {
    /// Converts a port substring, falling back to [`Port::Raw`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.parse::<u32>() {
            Ok(n) => Self::Numeric(n),
            Err(e) => {
                tracing::trace!(port = input, error = %e, "keeping non-numeric port verbatim");
                Self::Raw(input.to_string())
            }
        }
    }

    /// Returns the numeric value, if the port is numeric.
    #[must_use]
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Raw(_) => None,
        }
    }

    /// Returns true if the port was kept verbatim.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self::Numeric(u32::from(port))
    }
}

impl From<u32> for Port {
    fn from(port: u32) -> Self {
        Self::Numeric(port)
    }
}
