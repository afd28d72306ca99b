//! Bindings for the `http` crate types, enabled with the `http` feature.

use crate::context::CorsRequest;
use crate::middleware::ResponseWriter;
use http::header::{HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};

/// Stand-in for a header value that is not valid UTF-8. It keeps the header
/// present so classification still runs, and matches no sane allow-list entry.
const UNDECODABLE: &str = "\u{FFFD}";

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    /// UTF-8 values are passed through, including obs-text. Any other bytes
    /// yield [`UNDECODABLE`] instead of hiding the header.
    fn header(&self, name: &str) -> Option<&str> {
        let value = self.headers().get(name)?;
        match std::str::from_utf8(value.as_bytes()) {
            Ok(text) => Some(text),
            Err(_) => {
                tracing::debug!(name, "header value is not valid UTF-8");
                Some(UNDECODABLE)
            }
        }
    }
}

impl ResponseWriter for Response<Vec<u8>> {
    fn append_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::try_from(name),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers_mut().append(name, value);
            }
            _ => tracing::warn!(name, value, "dropping header that is not valid HTTP"),
        }
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => tracing::warn!(status, "ignoring invalid status code"),
        }
    }

    fn write_body(&mut self, chunk: &[u8]) {
        self.body_mut().extend_from_slice(chunk);
    }
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
