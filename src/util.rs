/// Splits a comma-delimited request header value into trimmed tokens.
///
/// Empty segments are kept (`"GET,,POST"` yields an empty token) so that they
/// fail allow-list membership instead of being silently accepted.
pub(crate) fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.trim().split(',').map(str::trim)
}

/// Joins set members into a comma-delimited header value.
pub(crate) fn join_tokens<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut joined = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            joined.push(',');
        }
        joined.push_str(value);
    }
    joined
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
