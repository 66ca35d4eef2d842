//! Delimiters and character classes for SIP URI and address parsing.

/// Separates the scheme from the rest of the URI, and the port from the host.
pub const COLON: char = ':';

/// Ends the userinfo part of a URI.
pub const USERINFO_TERMINATOR: char = '@';

/// Introduces the parameter list of a URI and separates parameters.
pub const PARAM_DELIMITER: char = ';';

/// [`PARAM_DELIMITER`] as a string, the default parameter join separator.
pub const PARAM_DELIMITER_STR: &str = ";";

/// Introduces the header list of a URI.
pub const HEADERS_DELIMITER: char = '?';

/// Separates URI headers.
pub const HEADER_SEPARATOR: char = '&';

/// Separates a parameter name from its value.
pub const PARAM_VALUE_DELIMITER: char = '=';

/// Parameter join separator of the legacy serializer.
///
/// Output joined with this separator does not re-parse into the same
/// parameter set; see [`ParamSeparator::Legacy`](crate::ParamSeparator::Legacy).
pub const LEGACY_PARAM_SEPARATOR: &str = "j";

/// Punctuation allowed in a scheme after its leading letter.
pub(crate) const SCHEME_MARKS: &str = "+-.";

/// Punctuation allowed in the user part, in addition to ASCII alphanumerics.
pub(crate) const USER_MARKS: &str = "-_.!~*'()&=+$,;?/%";

/// Characters that end a password.
pub(crate) const PASSWORD_STOPS: &str = ":@;?";

/// Characters that end a host.
pub(crate) const HOST_STOPS: &str = ";?:";

/// Punctuation allowed in an unquoted display name, in addition to ASCII
/// alphanumerics and linear whitespace.
pub(crate) const DISPLAY_NAME_MARKS: &str = "-._+~";
