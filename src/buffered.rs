use crate::context::CorsRequest;
use crate::middleware::ResponseWriter;

/// Owned, in-memory request. Header lookup ignores ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedRequest {
    method: String,
    headers: Vec<(String, String)>,
}

impl BufferedRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl CorsRequest for BufferedRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response sink that records everything written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value appended under `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseWriter for BufferedResponse {
    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }
}

#[cfg(test)]
#[path = "buffered_test.rs"]
mod buffered_test;
