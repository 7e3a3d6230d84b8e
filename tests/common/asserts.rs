#![allow(dead_code)]

use cors_filter_rs::{CorsDecision, Headers};

pub fn assert_continue(outcome: (CorsDecision, Headers)) -> Headers {
    match outcome {
        (CorsDecision::Continue, headers) => headers,
        (other, _) => panic!("expected continue decision, got {:?}", other),
    }
}

pub fn assert_terminate(outcome: (CorsDecision, Headers)) -> (Headers, u16) {
    match outcome {
        (CorsDecision::Terminate(status), headers) => (headers, status),
        (other, _) => panic!("expected terminate decision, got {:?}", other),
    }
}
