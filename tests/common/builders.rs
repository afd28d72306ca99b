#![allow(dead_code)]

use cors_gate_rs::constants::method;
use cors_gate_rs::{
    BufferedRequest, BufferedResponse, Cors, CorsDecision, CorsOptions, Handler, RequestContext,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn cors() -> CorsOptions {
    CorsOptions::default()
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }

    pub fn into_request(self) -> BufferedRequest {
        let request = BufferedRequest::new(self.method);
        match self.origin {
            Some(origin) => request.with_header("Origin", origin),
            None => request,
        }
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }

    pub fn into_request(self) -> BufferedRequest {
        let mut request = BufferedRequest::new(method::OPTIONS);
        if let Some(origin) = self.origin {
            request = request.with_header("Origin", origin);
        }
        if let Some(value) = self.request_method {
            request = request.with_header("Access-Control-Request-Method", value);
        }
        if let Some(value) = self.request_headers {
            request = request.with_header("Access-Control-Request-Headers", value);
        }
        request
    }
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}

/// Handler that counts invocations and writes a recognizable body.
#[derive(Default)]
pub struct RecordingHandler {
    calls: AtomicUsize,
}

pub const HANDLER_BODY: &[u8] = b"handled";

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Handler<BufferedRequest, BufferedResponse> for RecordingHandler {
    fn handle(&self, _request: &BufferedRequest, response: &mut BufferedResponse) {
        use cors_gate_rs::ResponseWriter;

        self.calls.fetch_add(1, Ordering::SeqCst);
        response.set_status(200);
        response.write_body(HANDLER_BODY);
    }
}
