use crate::constants::header;

/// Read-only view of an inbound request, as needed for CORS classification.
///
/// `header` must look names up case-insensitively and return the raw value
/// of the first occurrence.
pub trait CorsRequest {
    fn method(&self) -> &str;
    fn header(&self, name: &str) -> Option<&str>;
}

impl<T: CorsRequest + ?Sized> CorsRequest for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<R: CorsRequest + ?Sized>(request: &'a R) -> Self {
        Self {
            method: request.method(),
            origin: request.header(header::ORIGIN),
            access_control_request_method: request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }

    /// Origin value, with an empty header treated as absent.
    pub(crate) fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub(crate) fn request_method(&self) -> Option<&'a str> {
        self.access_control_request_method
            .filter(|value| !value.is_empty())
    }

    pub(crate) fn request_headers(&self) -> &'a str {
        self.access_control_request_headers.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
