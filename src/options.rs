use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::policy::CorsPolicy;

/// Mutable configuration for a [`CorsPolicy`].
///
/// Setters consume and return the builder; nothing is validated. Call
/// [`CorsOptions::build`] to obtain the frozen policy used at runtime.
///
/// ```
/// use cors_gate_rs::CorsOptions;
///
/// let policy = CorsOptions::default()
///     .allowed_origin("https://app.example")
///     .allowed_headers(["origin", "content-type"])
///     .allow_credentials(true)
///     .build();
///
/// assert_eq!(policy.allowed_origin(), "https://app.example");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CorsOptions {
    allowed_origin: String,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    allow_credentials: bool,
    exposed_headers: String,
    max_age: u64,
    preflight_status: Option<u16>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            allow_credentials: false,
            exposed_headers: String::new(),
            max_age: 1500,
            preflight_status: Some(204),
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value written to `Access-Control-Allow-Origin`.
    pub fn allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origin = origin.into();
        self
    }

    /// Replaces the method allow-list.
    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = AllowedMethods::list(methods);
        self
    }

    /// Replaces the header allow-list.
    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = AllowedHeaders::list(headers);
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    /// Raw comma-joined value for `Access-Control-Expose-Headers`. Empty disables the header.
    pub fn exposed_headers(mut self, headers: impl Into<String>) -> Self {
        self.exposed_headers = headers.into();
        self
    }

    /// Preflight cache lifetime in seconds.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Status applied to accepted preflights. `None` leaves it to the host.
    pub fn preflight_status(mut self, status: Option<u16>) -> Self {
        self.preflight_status = status;
        self
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(
            self.allowed_origin,
            self.allowed_methods,
            self.allowed_headers,
            self.allow_credentials,
            self.exposed_headers,
            self.max_age,
            self.preflight_status,
        )
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
