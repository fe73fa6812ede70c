use bunner_cors_middleware::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        super::headers::header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}",
    );
}
