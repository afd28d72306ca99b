use crate::headers::Headers;
use thiserror::Error;

/// Which branch of the CORS decision procedure a request took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    NoOrigin,
    ActualRequest,
    ValidPreflight,
    InvalidPreflight,
}

/// Headers and response metadata emitted for an actual request or an accepted preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to apply; only ever set for preflights.
    pub status: Option<u16>,
}

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    NoOrigin,
    Actual(CorsResult),
    Preflight(CorsResult),
    InvalidPreflight(PreflightRejection),
}

impl CorsDecision {
    pub fn classification(&self) -> Classification {
        match self {
            CorsDecision::NoOrigin => Classification::NoOrigin,
            CorsDecision::Actual(_) => Classification::ActualRequest,
            CorsDecision::Preflight(_) => Classification::ValidPreflight,
            CorsDecision::InvalidPreflight(_) => Classification::InvalidPreflight,
        }
    }

    /// Whether the wrapped handler runs for this decision.
    pub fn forwards(&self) -> bool {
        matches!(self, CorsDecision::NoOrigin | CorsDecision::Actual(_))
    }
}

/// Why a preflight was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreflightRejection {
    #[error("Access-Control-Request-Method is empty")]
    EmptyRequestMethod,
    #[error("Access-Control-Request-Method `{0}` is not supported")]
    MethodNotAllowed(String),
    #[error("Access-Control-Request-Headers `{0}` is not supported")]
    HeaderNotAllowed(String),
}
