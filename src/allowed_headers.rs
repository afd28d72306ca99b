use crate::constants::header;
use crate::util::{join_tokens, split_tokens};
use indexmap::IndexSet;

/// Allow-list consulted for `Access-Control-Request-Headers` and echoed in
/// `Access-Control-Allow-Headers`.
///
/// Entries are matched exactly as configured. Browsers send lowercase header
/// names, so configure lowercase tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>"))]
pub struct AllowedHeaders {
    values: IndexSet<String>,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([header::ORIGIN.to_ascii_lowercase()])
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows_header(&self, name: &str) -> bool {
        self.values.contains(name)
    }

    /// First comma-delimited entry of an `Access-Control-Request-Headers`
    /// value that is not listed. An empty value requests nothing.
    pub fn first_disallowed<'a>(&self, request_headers: &'a str) -> Option<&'a str> {
        if request_headers.is_empty() {
            return None;
        }

        split_tokens(request_headers).find(|name| !self.allows_header(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(join_tokens(&self.values))
        }
    }
}

impl From<Vec<String>> for AllowedHeaders {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
