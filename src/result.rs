use crate::headers::Headers;
use crate::origin::BoxError;
use thiserror::Error;

/// Headers and status for a preflight (`OPTIONS`) request. The response ends here.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to merge into the response produced by the rest of the chain.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(result) => &result.headers,
            CorsDecision::Simple(result) => &result.headers,
        }
    }
}

/// Whether the middleware chain should continue after the policy ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Errors that can be produced during CORS evaluation.
#[derive(Debug, Error)]
pub enum CorsError {
    /// The dynamic origin callback failed; its error is surfaced as-is.
    #[error(transparent)]
    Origin(BoxError),
}
