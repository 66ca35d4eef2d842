//! URI parameters.

use std::fmt;

use indexmap::IndexMap;

use crate::constants::{PARAM_DELIMITER, PARAM_DELIMITER_STR, PARAM_VALUE_DELIMITER};

/// Parameters of a URI (`;name=value;flag`).
///
/// Names are unique and keep the position of their first occurrence.
/// Assigning an existing name overwrites its value in place, so for repeated
/// names the last value wins.
///
/// Flag parameters without `=` are stored with an empty value.
///
/// # Examples
///
/// ```
/// use sip_address::UriParams;
///
/// let params = UriParams::parse("transport=udp;lr;a=1;a=2");
/// assert_eq!(params.get("transport"), Some("udp"));
/// assert_eq!(params.get("lr"), Some(""));
/// assert_eq!(params.get("a"), Some("2"));
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriParams {
    params: IndexMap<String, String>,
}

impl UriParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses parameters from the text between the leading `;` and the
    /// header list.
    ///
    /// Each segment is split on its first `=`. Name and value are trimmed of
    /// surrounding whitespace. Empty input yields no parameters.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut params = Self::new();

        if input.is_empty() {
            return params;
        }

        for segment in input.split(PARAM_DELIMITER) {
            let (name, value) = segment
                .split_once(PARAM_VALUE_DELIMITER)
                .unwrap_or((segment, ""));
            params.insert(name.trim(), value.trim());
        }

        params
    }

    /// Sets a parameter, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(name.into(), value.into())
    }

    /// Removes a parameter, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.shift_remove(name)
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Joins `name=value` pairs with `separator`.
    ///
    /// Every pair carries the `=`, including flags with an empty value.
    /// Names and values are written trimmed, as stored. Inside a URI, a pair
    /// containing `@` may therefore re-parse as part of a userinfo.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}{PARAM_VALUE_DELIMITER}{v}"))
            .collect();
        pairs.join(separator)
    }
}

impl fmt::Display for UriParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(PARAM_DELIMITER_STR))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UriParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        assert!(UriParams::parse("").is_empty());
    }

    #[test]
    fn parse_flag_param() {
        let params = UriParams::parse("novalue");
        assert_eq!(params.get("novalue"), Some(""));
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let params = UriParams::parse("maddr=a=b");
        assert_eq!(params.get("maddr"), Some("a=b"));
    }

    #[test]
    fn parse_trims_name_and_value() {
        let params = UriParams::parse(" transport = tcp ; lr");
        assert_eq!(params.get("transport"), Some("tcp"));
        assert!(params.contains("lr"));
    }

    #[test]
    fn duplicate_last_value_wins() {
        let params = UriParams::parse("a=1;a=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some("2"));
    }

    #[test]
    fn duplicate_keeps_first_position() {
        let params = UriParams::parse("a=1;b=2;a=3");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn display_preserves_insertion_order() {
        let params = UriParams::parse("z=1;a=2");
        assert_eq!(params.to_string(), "z=1;a=2");
    }

    #[test]
    fn display_writes_equals_for_flags() {
        let params = UriParams::parse("lr");
        assert_eq!(params.to_string(), "lr=");
    }

    #[test]
    fn remove_keeps_order() {
        let mut params = UriParams::parse("a=1;b=2;c=3");
        assert_eq!(params.remove("b"), Some("2".to_string()));
        assert_eq!(params.join(";"), "a=1;c=3");
    }

    #[test]
    fn collect_from_pairs() {
        let params: UriParams = [("transport", "udp"), ("user", "phone")].into_iter().collect();
        assert_eq!(params.to_string(), "transport=udp;user=phone");
    }
}
