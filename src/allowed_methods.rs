use crate::constants::method;
use crate::util::{join_tokens, split_tokens};
use indexmap::IndexSet;

/// Allow-list consulted for `Access-Control-Request-Method` and echoed in
/// `Access-Control-Allow-Methods`.
///
/// Membership is case-sensitive: `get` does not match a configured `GET`.
/// Iteration follows insertion order, but callers must not rely on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>"))]
pub struct AllowedMethods {
    values: IndexSet<String>,
}

impl AllowedMethods {
    /// Construct an allow-list from the provided methods. Duplicates collapse.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.values.contains(method)
    }

    /// Returns the first requested method that is not allowed, if any.
    pub fn first_disallowed<'a>(&self, requested: &'a str) -> Option<&'a str> {
        split_tokens(requested).find(|method| !self.allows_method(method))
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

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(join_tokens(&self.values))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::UPDATE,
        ])
    }
}

impl From<Vec<String>> for AllowedMethods {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
