use crate::constants::header;
use crate::constants::response::{INVALID_BODY, INVALID_CONTENT_TYPE};
use crate::context::{CorsRequest, RequestContext};
use crate::cors::Cors;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use std::sync::Arc;

/// Response sink a [`Handler`] writes into.
pub trait ResponseWriter {
    fn append_header(&mut self, name: &str, value: &str);
    fn set_status(&mut self, status: u16);
    fn write_body(&mut self, chunk: &[u8]);
}

/// Something that answers a request by writing into a response.
///
/// Implemented by plain handlers and by [`CorsMiddleware`] itself, so
/// middlewares can wrap each other.
pub trait Handler<Req: ?Sized, Res: ?Sized> {
    fn handle(&self, request: &Req, response: &mut Res);
}

impl<Req: ?Sized, Res: ?Sized, H: Handler<Req, Res> + ?Sized> Handler<Req, Res> for &H {
    fn handle(&self, request: &Req, response: &mut Res) {
        (**self).handle(request, response)
    }
}

impl<Req: ?Sized, Res: ?Sized, H: Handler<Req, Res> + ?Sized> Handler<Req, Res> for Arc<H> {
    fn handle(&self, request: &Req, response: &mut Res) {
        (**self).handle(request, response)
    }
}

/// Adapter returned by [`handler_fn`].
#[derive(Clone, Copy, Debug)]
pub struct HandlerFn<F> {
    f: F,
}

/// Turns a closure into a [`Handler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

impl<Req: ?Sized, Res: ?Sized, F> Handler<Req, Res> for HandlerFn<F>
where
    F: Fn(&Req, &mut Res),
{
    fn handle(&self, request: &Req, response: &mut Res) {
        (self.f)(request, response)
    }
}

/// A [`Handler`] that enforces CORS in front of `inner`.
///
/// Built through [`Cors::attach`]. The wrapped handler runs for requests
/// without an `Origin` and for actual cross-origin requests; preflights are
/// answered here and never reach it.
#[derive(Debug, Clone)]
pub struct CorsMiddleware<H> {
    cors: Cors,
    inner: H,
}

impl<H> CorsMiddleware<H> {
    pub(crate) fn new(cors: Cors, inner: H) -> Self {
        Self { cors, inner }
    }

    pub fn policy(&self) -> &CorsPolicy {
        self.cors.policy()
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<Req, Res, H> Handler<Req, Res> for CorsMiddleware<H>
where
    Req: CorsRequest + ?Sized,
    Res: ResponseWriter + ?Sized,
    H: Handler<Req, Res>,
{
    fn handle(&self, request: &Req, response: &mut Res) {
        let context = RequestContext::from_request(request);

        match self.cors.check(&context) {
            CorsDecision::NoOrigin => self.inner.handle(request, response),
            CorsDecision::Actual(result) => {
                apply_headers(response, &result.headers);
                self.inner.handle(request, response);
            }
            CorsDecision::Preflight(result) => {
                if let Some(status) = result.status {
                    response.set_status(status);
                }
                apply_headers(response, &result.headers);
            }
            CorsDecision::InvalidPreflight(_) => {
                response.append_header(header::CONTENT_TYPE, INVALID_CONTENT_TYPE);
                response.write_body(INVALID_BODY.as_bytes());
            }
        }
    }
}

fn apply_headers<Res: ResponseWriter + ?Sized>(response: &mut Res, headers: &Headers) {
    for (name, value) in headers {
        response.append_header(name, value);
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
