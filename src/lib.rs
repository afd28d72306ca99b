//! Static-policy CORS enforcement for request handlers.
//!
//! A [`Cors`] engine classifies every request as same-origin, actual
//! cross-origin, or preflight, and [`Cors::attach`] turns it into a
//! [`Handler`] that decorates or answers responses accordingly.
//!
//! ```
//! use cors_gate_rs::{
//!     BufferedRequest, BufferedResponse, Cors, CorsOptions, Handler, ResponseWriter, handler_fn,
//! };
//!
//! let app = handler_fn(|_: &BufferedRequest, response: &mut BufferedResponse| {
//!     response.write_body(b"hello");
//! });
//! let cors = Cors::new(CorsOptions::default().allow_credentials(true).build());
//! let service = cors.attach(app);
//!
//! let request = BufferedRequest::new("OPTIONS")
//!     .with_header("Origin", "https://a.com")
//!     .with_header("Access-Control-Request-Method", "POST");
//! let mut response = BufferedResponse::new();
//! service.handle(&request, &mut response);
//!
//! assert_eq!(response.status(), Some(204));
//! assert_eq!(response.header_value("Access-Control-Max-Age"), Some("1500"));
//! assert!(response.body().is_empty());
//! ```

mod allowed_headers;
mod allowed_methods;
mod buffered;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
#[cfg(feature = "http")]
mod http_compat;
mod middleware;
mod options;
mod policy;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use buffered::{BufferedRequest, BufferedResponse};
pub use context::{CorsRequest, RequestContext};
pub use cors::Cors;
pub use headers::Headers;
pub use middleware::{CorsMiddleware, Handler, HandlerFn, ResponseWriter, handler_fn};
pub use options::CorsOptions;
pub use policy::CorsPolicy;
pub use result::{Classification, CorsDecision, CorsResult, PreflightRejection};
