use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use once_cell::sync::OnceCell;

/// Frozen CORS policy produced by [`crate::CorsOptions::build`].
///
/// There are no setters; once a policy is handed to [`crate::Cors`] it stays
/// as built for the lifetime of the middleware. Joined header values for
/// preflight responses are computed on first use and reused afterwards.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    allowed_origin: String,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    allow_credentials: bool,
    exposed_headers: String,
    max_age: u64,
    preflight_status: Option<u16>,
    methods_value: OnceCell<Option<String>>,
    headers_value: OnceCell<Option<String>>,
    max_age_value: OnceCell<String>,
}

impl CorsPolicy {
    pub(crate) fn new(
        allowed_origin: String,
        allowed_methods: AllowedMethods,
        allowed_headers: AllowedHeaders,
        allow_credentials: bool,
        exposed_headers: String,
        max_age: u64,
        preflight_status: Option<u16>,
    ) -> Self {
        Self {
            allowed_origin,
            allowed_methods,
            allowed_headers,
            allow_credentials,
            exposed_headers,
            max_age,
            preflight_status,
            methods_value: OnceCell::new(),
            headers_value: OnceCell::new(),
            max_age_value: OnceCell::new(),
        }
    }

    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn exposed_headers(&self) -> &str {
        &self.exposed_headers
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    pub fn preflight_status(&self) -> Option<u16> {
        self.preflight_status
    }

    pub(crate) fn methods_header_value(&self) -> Option<&str> {
        self.methods_value
            .get_or_init(|| self.allowed_methods.header_value())
            .as_deref()
    }

    pub(crate) fn headers_header_value(&self) -> Option<&str> {
        self.headers_value
            .get_or_init(|| self.allowed_headers.header_value())
            .as_deref()
    }

    pub(crate) fn max_age_header_value(&self) -> &str {
        self.max_age_value.get_or_init(|| self.max_age.to_string())
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        crate::options::CorsOptions::default().build()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
