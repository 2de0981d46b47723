#![allow(dead_code)]

pub use event_error_test_utils::builders;
pub use event_error_test_utils::init_tracing;

use std::fmt;

/// Error type used across the integration tests.
#[derive(Debug)]
pub struct TestError(pub String);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TestError {}

pub fn test_error(msg: &str) -> event_error::AppError {
    event_error::AppError::new(TestError(msg.to_string()))
}
