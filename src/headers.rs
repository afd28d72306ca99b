use std::collections::HashMap;

/// CORS response headers keyed by canonical header name.
pub type Headers = HashMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: HashMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_string(), value.into());
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
