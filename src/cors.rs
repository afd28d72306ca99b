use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::middleware::CorsMiddleware;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, CorsResult, PreflightRejection};

/// Core CORS engine that classifies requests against a frozen [`CorsPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Wraps `handler`, consuming the engine so the policy cannot change afterwards.
    pub fn attach<H>(self, handler: H) -> CorsMiddleware<H> {
        CorsMiddleware::new(self, handler)
    }

    /// Classifies the request and computes the headers to write. Never touches a response.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let decision = if request.origin().is_none() {
            CorsDecision::NoOrigin
        } else if request.method != method::OPTIONS {
            CorsDecision::Actual(self.process_actual())
        } else {
            match request.request_method() {
                None => CorsDecision::Actual(self.process_actual()),
                Some(requested) => match self.process_preflight(requested, request) {
                    Ok(result) => CorsDecision::Preflight(result),
                    Err(rejection) => {
                        tracing::warn!(
                            origin = request.origin.unwrap_or_default(),
                            reason = %rejection,
                            "rejected CORS preflight"
                        );
                        CorsDecision::InvalidPreflight(rejection)
                    }
                },
            }
        };

        tracing::trace!(
            method = request.method,
            classification = ?decision.classification(),
            "classified CORS request"
        );
        decision
    }

    fn process_actual(&self) -> CorsResult {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_origin_header());
        headers.extend(builder.build_credentials_header());

        CorsResult {
            headers: headers.into_headers(),
            status: None,
        }
    }

    fn process_preflight(
        &self,
        requested_method: &str,
        request: &RequestContext<'_>,
    ) -> Result<CorsResult, PreflightRejection> {
        if requested_method.trim().is_empty() {
            return Err(PreflightRejection::EmptyRequestMethod);
        }
        if let Some(denied) = self
            .policy
            .allowed_methods()
            .first_disallowed(requested_method)
        {
            return Err(PreflightRejection::MethodNotAllowed(denied.to_string()));
        }
        if let Some(denied) = self
            .policy
            .allowed_headers()
            .first_disallowed(request.request_headers())
        {
            return Err(PreflightRejection::HeaderNotAllowed(denied.to_string()));
        }

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::with_estimate(5);
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_origin_header());
        headers.extend(builder.build_credentials_header());

        Ok(CorsResult {
            headers: headers.into_headers(),
            status: self.policy.preflight_status(),
        })
    }
}

impl From<CorsPolicy> for Cors {
    fn from(policy: CorsPolicy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
