#![allow(dead_code)]

use cors_gate_rs::{CorsDecision, Headers, PreflightRejection};

use super::headers::header_value;

pub fn assert_actual(decision: CorsDecision) -> Headers {
    assert!(decision.forwards(), "actual requests must be forwarded");
    match decision {
        CorsDecision::Actual(result) => {
            assert!(result.status.is_none(), "actual requests keep the handler status");
            result.headers
        }
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, Option<u16>) {
    assert!(!decision.forwards(), "preflights must not be forwarded");
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_invalid(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::InvalidPreflight(rejection) => rejection,
        other => panic!("expected invalid preflight, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}",
    );
}
