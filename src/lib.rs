//! Parser and serializer for SIP-style addresses and URIs.
//!
//! This crate turns the text of a SIP `name-addr` (as carried by `From`,
//! `To` and `Contact` header values) into structured values and back. It is
//! a pure text transform: there is no I/O, no network transport and no
//! scheme-specific resolution.
//!
//! # Overview
//!
//! A [`Uri`] has the structure:
//!
//! ```text
//! scheme ":" [ user [ ":" password ] "@" ] host [ ":" port ] [ ";" params ] [ "?" headers ]
//! ```
//!
//! An [`Address`] wraps a URI with an optional display name, in one of three
//! forms tried in order: `Name <uri>`, `"Name" <uri>`, or a bare URI.
//!
//! # Quick Start
//!
//! ```rust
//! use sip_address::{Address, Port, Uri};
//!
//! // Parse a URI
//! let uri = Uri::parse("sip:alice@atlanta.example.com:5060;transport=tcp").unwrap();
//! assert_eq!(uri.user.as_deref(), Some("alice"));
//! assert_eq!(uri.port, Some(Port::Numeric(5060)));
//! assert_eq!(uri.params.get("transport"), Some("tcp"));
//!
//! // Parse an address
//! let addr = Address::parse("\"Alice\" <sip:alice@atlanta.example.com>").unwrap();
//! assert_eq!(addr.display_name, "Alice");
//! assert_eq!(addr.to_string(), "\"Alice\" sip:alice@atlanta.example.com");
//! ```
//!
//! # Error Policy
//!
//! Parsing never panics. [`Uri::parse`] and [`Address::parse`] return a
//! [`ParseError`]; [`Address::loads`] returns a consumed length of 0. A port
//! that does not fit in a `u32` is kept as [`Port::Raw`] rather than
//! rejected. Serialization is total: an unset [`Uri`] serializes as the
//! empty string.
//!
//! # Parameter Separator
//!
//! Parameters serialize joined by `;`. Older serializers joined them with a
//! literal `j`, which does not re-parse into the same parameters; that output
//! is still available through [`ParamSeparator::Legacy`].
//!
//! # Logging
//!
//! Grammar misses and port fallbacks emit `tracing` events at `trace` level.
//! The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod builder;
mod constants;
mod error;
mod grammar;
mod headers;
mod options;
mod params;
mod port;
pub mod prelude;
mod uri;

pub use address::{Address, ParsedAddress};
pub use builder::{Empty, HasScheme, UriBuilder};
pub use constants::{
    COLON, HEADERS_DELIMITER, HEADER_SEPARATOR, LEGACY_PARAM_SEPARATOR, PARAM_DELIMITER,
    PARAM_DELIMITER_STR, PARAM_VALUE_DELIMITER, USERINFO_TERMINATOR,
};
pub use error::{BuilderError, ParseError, ParseErrorKind, UriError};
pub use grammar::AddressForm;
pub use headers::UriHeaders;
pub use options::{ParamSeparator, SerializeOptions};
pub use params::UriParams;
pub use port::Port;
pub use uri::Uri;
