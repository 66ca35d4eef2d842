//! Typestate builder for constructing [`Uri`] instances.
//!
//! The scheme is the only required component. The builder uses a phantom
//! type so that `build()` only exists once a scheme has been set.

use std::marker::PhantomData;

use crate::error::BuilderError;
use crate::grammar;
use crate::headers::UriHeaders;
use crate::params::UriParams;
use crate::port::Port;
use crate::uri::Uri;

/// Marker: no scheme set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: scheme set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasScheme;

/// A typestate builder for constructing [`Uri`] instances.
///
/// # Examples
///
/// ```
/// use sip_address::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .scheme("sip")
///     .user("alice")
///     .host("atlanta.example.com")
///     .port(5060u16)
///     .param("transport", "tcp")
///     .header("subject=project")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "sip:alice@atlanta.example.com:5060;transport=tcp?subject=project");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use sip_address::UriBuilder;
///
/// // Error: cannot call build() without a scheme
/// let uri = UriBuilder::new().host("example.org").build();
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder<State = Empty> {
    uri: Uri,
    _state: PhantomData<State>,
}

impl UriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            uri: Uri::new(),
            _state: PhantomData,
        }
    }
}

impl Default for UriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> UriBuilder<State> {
    /// Sets the scheme and advances to the [`HasScheme`] state.
    ///
    /// The scheme is validated by [`build`](UriBuilder::build).
    #[must_use]
    pub fn scheme(self, scheme: impl Into<String>) -> UriBuilder<HasScheme> {
        UriBuilder {
            uri: Uri {
                scheme: scheme.into(),
                ..self.uri
            },
            _state: PhantomData,
        }
    }

    /// Sets the user.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.uri.user = Some(user.into());
        self
    }

    /// Sets the password. Requires a user.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.uri.password = Some(password.into());
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.uri.host = host.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: impl Into<Port>) -> Self {
        self.uri.port = Some(port.into());
        self
    }

    /// Sets a parameter. If called repeatedly for one name, the last value wins.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.uri.params.insert(name, value);
        self
    }

    /// Replaces all parameters.
    #[must_use]
    pub fn params(mut self, params: UriParams) -> Self {
        self.uri.params = params;
        self
    }

    /// Appends a raw header.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.uri.headers.push(header);
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn headers(mut self, headers: UriHeaders) -> Self {
        self.uri.headers = headers;
        self
    }
}

impl UriBuilder<HasScheme> {
    /// Builds the final [`Uri`].
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidScheme`] if the scheme does not start
    /// with a letter followed by letters, digits, `+`, `-` or `.`, and
    /// [`BuilderError::PasswordWithoutUser`] if a password was set without a
    /// user.
    pub fn build(self) -> Result<Uri, BuilderError> {
        if !grammar::is_scheme(&self.uri.scheme) {
            return Err(BuilderError::InvalidScheme {
                scheme: self.uri.scheme,
            });
        }

        if self.uri.password.is_some() && self.uri.user.is_none() {
            return Err(BuilderError::PasswordWithoutUser);
        }

        Ok(self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_minimal() {
        let uri = UriBuilder::new().scheme("sip").host("example.org").build().unwrap();
        assert_eq!(uri.to_string(), "sip:example.org");
    }

    #[test]
    fn build_matches_parse() {
        let built = UriBuilder::new()
            .scheme("sip")
            .user("foo")
            .password("bar")
            .host("example.org")
            .port(5060u16)
            .param("transport", "udp")
            .param("novalue", "")
            .header("header=val")
            .header("second=sec_val")
            .build()
            .unwrap();

        let parsed = Uri::parse(
            "sip:foo:bar@example.org:5060;transport=udp;novalue?header=val&second=sec_val",
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn setters_work_before_scheme() {
        let uri = UriBuilder::new().host("example.org").scheme("sips").build().unwrap();
        assert_eq!(uri.host, "example.org");
        assert_eq!(uri.scheme, "sips");
    }

    #[test]
    fn repeated_param_last_wins() {
        let uri = UriBuilder::new()
            .scheme("sip")
            .param("a", "1")
            .param("a", "2")
            .build()
            .unwrap();
        assert_eq!(uri.params.get("a"), Some("2"));
        assert_eq!(uri.params.len(), 1);
    }

    #[test]
    fn invalid_scheme_is_rejected() {
        let result = UriBuilder::new().scheme("1sip").build();
        assert_eq!(
            result,
            Err(BuilderError::InvalidScheme {
                scheme: "1sip".to_string()
            })
        );

        let result = UriBuilder::new().scheme("").build();
        assert!(matches!(result, Err(BuilderError::InvalidScheme { .. })));
    }

    #[test]
    fn password_requires_user() {
        let result = UriBuilder::new()
            .scheme("sip")
            .password("secret")
            .host("example.org")
            .build();
        assert_eq!(result, Err(BuilderError::PasswordWithoutUser));
    }

    #[test]
    fn default_creates_empty_builder() {
        let builder = UriBuilder::default();
        assert!(builder.uri.is_empty());
    }
}
