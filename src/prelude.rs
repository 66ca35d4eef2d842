//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use sip_address::prelude::*;
//!
//! let addr = Address::parse("<sip:bob@biloxi.example.com>").unwrap();
//! assert_eq!(addr.uri().map(|u| u.host.as_str()), Some("biloxi.example.com"));
//! ```
//!
//! Builder state markers (`Empty`, `HasScheme`) are intentionally excluded
//! as they are implementation details.

pub use crate::{
    // Core types
    Address, AddressForm, ParsedAddress, Port, Uri, UriHeaders, UriParams,
    // Builder
    UriBuilder,
    // Options
    ParamSeparator, SerializeOptions,
    // Errors
    BuilderError, ParseError, ParseErrorKind, UriError,
};
