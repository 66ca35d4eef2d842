//! Matchers for the URI grammar and the ordered address forms.
//!
//! ```text
//! uri          = scheme ":" [ user [ ":" password ] "@" ] host [ ":" port ]
//!                [ ";" params ] [ "?" headers ]
//! name-addr    = *name-char "<" 1*(not ">") ">"
//! quoted-addr  = DQUOTE 1*(not DQUOTE) DQUOTE *WSP "<" 1*(not ">") ">"
//! bare-addr    = *WSP 1*(not ";")
//! ```
//!
//! Matchers work on byte offsets of `&str` input and only split at ASCII
//! delimiters, so every returned slice is on a char boundary.

use crate::constants::{
    COLON, DISPLAY_NAME_MARKS, HEADERS_DELIMITER, HOST_STOPS, PARAM_DELIMITER, PASSWORD_STOPS,
    SCHEME_MARKS, USER_MARKS, USERINFO_TERMINATOR,
};
use crate::error::UriError;

/// Raw captures of a URI match, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriCaptures<'a> {
    pub scheme: &'a str,
    pub user: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
    pub params: Option<&'a str>,
    pub headers: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Userinfo<'a> {
    user: &'a str,
    password: Option<&'a str>,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HostTail<'a> {
    host: &'a str,
    port: Option<&'a str>,
    params: Option<&'a str>,
    headers: Option<&'a str>,
}

/// Which address form matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressForm {
    /// `Display Name <uri>`, including `<uri>` with no name
    NameAddr,
    /// `"Display Name" <uri>`
    QuotedNameAddr,
    /// A bare URI, up to the first `;`
    Bare,
}

/// Raw captures of an address match, untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AddressMatch<'a> {
    pub form: AddressForm,
    pub display_name: &'a str,
    pub uri: &'a str,
    /// Bytes of input covered by the match
    pub consumed: usize,
}

/// A named address form and its matcher.
pub(crate) struct Alternative {
    pub form: AddressForm,
    pub matcher: for<'a> fn(&'a str) -> Option<(&'a str, &'a str, usize)>,
}

/// Address forms in precedence order. The first match wins.
pub(crate) static ADDRESS_ALTERNATIVES: [Alternative; 3] = [
    Alternative {
        form: AddressForm::NameAddr,
        matcher: match_name_addr,
    },
    Alternative {
        form: AddressForm::QuotedNameAddr,
        matcher: match_quoted_name_addr,
    },
    Alternative {
        form: AddressForm::Bare,
        matcher: match_bare,
    },
];

/// Length in bytes of the longest prefix whose chars satisfy `pred`.
fn span(input: &str, pred: impl Fn(char) -> bool) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(input.len(), |(i, _)| i)
}

const fn is_wsp(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || SCHEME_MARKS.contains(c)
}

fn is_user_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || USER_MARKS.contains(c)
}

fn is_password_char(c: char) -> bool {
    !PASSWORD_STOPS.contains(c)
}

fn is_host_char(c: char) -> bool {
    !HOST_STOPS.contains(c)
}

fn is_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_wsp(c) || DISPLAY_NAME_MARKS.contains(c)
}

/// Returns true if `input` matches the scheme production in full.
pub(crate) fn is_scheme(input: &str) -> bool {
    !input.is_empty() && scheme_len(input) == input.len()
}

fn scheme_len(input: &str) -> usize {
    match input.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => span(input, is_scheme_char),
        _ => 0,
    }
}

/// Matches the whole of `input` against the URI grammar.
pub(crate) fn match_uri(input: &str) -> Result<UriCaptures<'_>, UriError> {
    let scheme_end = scheme_len(input);
    if scheme_end == 0 || !input[scheme_end..].starts_with(COLON) {
        let found = input
            .split_once(COLON)
            .map(|(scheme, _)| scheme.to_string());
        return Err(UriError::InvalidScheme { found });
    }

    let offset = scheme_end + 1;
    let rest = &input[offset..];
    let scheme = &input[..scheme_end];

    // With userinfo first; a host may itself contain '@', so fall back to
    // reading everything after the scheme as host.
    if let Some(info) = match_userinfo(rest) {
        if let Ok(tail) = match_host_tail(&rest[info.len..]) {
            return Ok(UriCaptures {
                scheme,
                user: Some(info.user),
                password: info.password,
                host: tail.host,
                port: tail.port,
                params: tail.params,
                headers: tail.headers,
            });
        }
    }

    let tail = match_host_tail(rest).map_err(|e| e.offset_by(offset))?;
    Ok(UriCaptures {
        scheme,
        user: None,
        password: None,
        host: tail.host,
        port: tail.port,
        params: tail.params,
        headers: tail.headers,
    })
}

fn match_userinfo(input: &str) -> Option<Userinfo<'_>> {
    let user_len = span(input, is_user_char);
    if user_len == 0 {
        return None;
    }
    let user = &input[..user_len];
    let after = &input[user_len..];

    if after.starts_with(USERINFO_TERMINATOR) {
        return Some(Userinfo {
            user,
            password: None,
            len: user_len + 1,
        });
    }

    let candidate = after.strip_prefix(COLON)?;
    let password_len = span(candidate, is_password_char);
    if password_len == 0 || !candidate[password_len..].starts_with(USERINFO_TERMINATOR) {
        return None;
    }
    Some(Userinfo {
        user,
        password: Some(&candidate[..password_len]),
        len: user_len + 1 + password_len + 1,
    })
}

fn match_host_tail(input: &str) -> Result<HostTail<'_>, UriError> {
    let mut pos = span(input, is_host_char);
    let host = &input[..pos];

    let mut port = None;
    if input[pos..].starts_with(COLON) {
        let digits = span(&input[pos + 1..], |c| c.is_ascii_digit());
        if digits == 0 {
            return Err(UriError::MissingPort { position: pos });
        }
        port = Some(&input[pos + 1..pos + 1 + digits]);
        pos += 1 + digits;
    }

    let mut params = None;
    if input[pos..].starts_with(PARAM_DELIMITER) {
        let len = span(&input[pos + 1..], |c| c != HEADERS_DELIMITER);
        params = Some(&input[pos + 1..pos + 1 + len]);
        pos += 1 + len;
    }

    let mut headers = None;
    if input[pos..].starts_with(HEADERS_DELIMITER) {
        headers = Some(&input[pos + 1..]);
        pos = input.len();
    }

    match input[pos..].chars().next() {
        None => Ok(HostTail {
            host,
            port,
            params,
            headers,
        }),
        Some(char) => Err(UriError::UnexpectedChar {
            char,
            position: pos,
        }),
    }
}

/// Tries each address form in precedence order.
pub(crate) fn match_address(input: &str) -> Option<AddressMatch<'_>> {
    ADDRESS_ALTERNATIVES.iter().find_map(|alt| {
        (alt.matcher)(input).map(|(display_name, uri, consumed)| AddressMatch {
            form: alt.form,
            display_name,
            uri,
            consumed,
        })
    })
}

/// Bracketed URI: `<` then one or more non-`>` chars then `>`.
/// Returns the URI text and the bytes covered including both brackets.
fn match_bracketed(input: &str) -> Option<(&str, usize)> {
    let inner = input.strip_prefix('<')?;
    let len = span(inner, |c| c != '>');
    if len == 0 || !inner[len..].starts_with('>') {
        return None;
    }
    Some((&inner[..len], len + 2))
}

fn match_name_addr(input: &str) -> Option<(&str, &str, usize)> {
    let name_len = span(input, is_display_name_char);
    let (uri, len) = match_bracketed(&input[name_len..])?;
    Some((&input[..name_len], uri, name_len + len))
}

fn match_quoted_name_addr(input: &str) -> Option<(&str, &str, usize)> {
    let quoted = input.strip_prefix('"')?;
    let name_len = span(quoted, |c| c != '"');
    if name_len == 0 || !quoted[name_len..].starts_with('"') {
        return None;
    }
    let after_quote = 1 + name_len + 1;
    let gap = span(&input[after_quote..], is_wsp);
    let (uri, len) = match_bracketed(&input[after_quote + gap..])?;
    Some((&quoted[..name_len], uri, after_quote + gap + len))
}

fn match_bare(input: &str) -> Option<(&str, &str, usize)> {
    let len = span(input, |c| c != PARAM_DELIMITER);
    if len == 0 {
        return None;
    }
    let leading = span(&input[..len], is_wsp);
    Some(("", &input[leading..len], len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_full_captures() {
        let m = match_uri(
            "sip:foo:bar@example.org:5060;transport=udp;novalue;param=pval?header=val&second=sec_val",
        )
        .unwrap();
        assert_eq!(m.scheme, "sip");
        assert_eq!(m.user, Some("foo"));
        assert_eq!(m.password, Some("bar"));
        assert_eq!(m.host, "example.org");
        assert_eq!(m.port, Some("5060"));
        assert_eq!(m.params, Some("transport=udp;novalue;param=pval"));
        assert_eq!(m.headers, Some("header=val&second=sec_val"));
    }

    #[test]
    fn uri_without_userinfo() {
        let m = match_uri("sip:example.org").unwrap();
        assert_eq!(m.user, None);
        assert_eq!(m.host, "example.org");
    }

    #[test]
    fn uri_user_may_contain_semicolon() {
        let m = match_uri("sip:alice;phone-context=x@example.org").unwrap();
        assert_eq!(m.user, Some("alice;phone-context=x"));
        assert_eq!(m.host, "example.org");
        assert_eq!(m.params, None);
    }

    #[test]
    fn uri_at_in_host_falls_back_without_userinfo() {
        // "a b" is not a valid user, so the '@' ends up in the host.
        let m = match_uri("sip:a b@example.org").unwrap();
        assert_eq!(m.user, None);
        assert_eq!(m.host, "a b@example.org");
    }

    #[test]
    fn uri_empty_host() {
        let m = match_uri("tel:;phone-context=+1").unwrap();
        assert_eq!(m.host, "");
        assert_eq!(m.params, Some("phone-context=+1"));
    }

    #[test]
    fn uri_colon_without_port_fails() {
        assert_eq!(
            match_uri("sip:example.org:"),
            Err(UriError::MissingPort { position: 15 })
        );
    }

    #[test]
    fn uri_second_colon_fails() {
        assert_eq!(
            match_uri("sip:example.org:5060:1"),
            Err(UriError::UnexpectedChar {
                char: ':',
                position: 20
            })
        );
    }

    #[test]
    fn uri_bad_scheme_fails() {
        assert_eq!(
            match_uri("1sip:example.org"),
            Err(UriError::InvalidScheme {
                found: Some("1sip".to_string())
            })
        );
        assert_eq!(
            match_uri("example.org"),
            Err(UriError::InvalidScheme { found: None })
        );
    }

    #[test]
    fn scheme_production() {
        assert!(is_scheme("sips"));
        assert!(is_scheme("x-foo+bar.1"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("9p"));
        assert!(!is_scheme("si p"));
    }

    #[test]
    fn name_addr_form() {
        let m = match_address("John Doe <sip:john@example.org>;tag=1").unwrap();
        assert_eq!(m.form, AddressForm::NameAddr);
        assert_eq!(m.display_name, "John Doe ");
        assert_eq!(m.uri, "sip:john@example.org");
        assert_eq!(m.consumed, 31);
    }

    #[test]
    fn bracketed_without_name_is_name_addr() {
        let m = match_address("<sip:john@example.org>").unwrap();
        assert_eq!(m.form, AddressForm::NameAddr);
        assert_eq!(m.display_name, "");
    }

    #[test]
    fn quoted_form() {
        let m = match_address("\"Doe, John\"\t <sip:john@example.org>").unwrap();
        assert_eq!(m.form, AddressForm::QuotedNameAddr);
        assert_eq!(m.display_name, "Doe, John");
        assert_eq!(m.uri, "sip:john@example.org");
        assert_eq!(m.consumed, 35);
    }

    #[test]
    fn quoted_name_must_not_be_empty() {
        let m = match_address("\"\" <sip:john@example.org>").unwrap();
        assert_eq!(m.form, AddressForm::Bare);
    }

    #[test]
    fn bare_form_stops_at_semicolon() {
        let m = match_address("  sip:john@example.org;tag=1").unwrap();
        assert_eq!(m.form, AddressForm::Bare);
        assert_eq!(m.uri, "sip:john@example.org");
        assert_eq!(m.consumed, 22);
    }

    #[test]
    fn empty_input_matches_nothing() {
        assert_eq!(match_address(""), None);
        assert_eq!(match_address(";tag=1"), None);
    }

    #[test]
    fn alternatives_are_ordered() {
        let forms: Vec<_> = ADDRESS_ALTERNATIVES.iter().map(|alt| alt.form).collect();
        assert_eq!(
            forms,
            vec![
                AddressForm::NameAddr,
                AddressForm::QuotedNameAddr,
                AddressForm::Bare
            ]
        );
    }
}
