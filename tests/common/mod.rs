#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod headers;

/// Routes library logs to the test harness.
///
/// Set `RUST_LOG=bunner_cors_middleware=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
