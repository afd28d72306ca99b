use crate::constants::{header, response};
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.policy.allowed_origin(),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.allow_credentials() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                response::CREDENTIALS_TRUE,
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.policy.methods_header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.policy.headers_header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.policy.max_age_header_value(),
        );
        headers
    }

    /// Written verbatim; the configured value is not re-split or trimmed.
    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let value = self.policy.exposed_headers();
        if value.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
