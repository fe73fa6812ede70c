use crate::constants::method;
use crate::origin::Origin;

/// Typed CORS configuration. Read-only once handed to a [`CorsPolicy`](crate::CorsPolicy).
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Preflight cache duration in seconds. `None` and `Some(0)` both omit the header.
    pub max_age: Option<u64>,
    pub credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Wildcard,
            allow_methods: vec![
                method::GET.into(),
                method::HEAD.into(),
                method::PUT.into(),
                method::POST.into(),
                method::DELETE.into(),
                method::PATCH.into(),
            ],
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            max_age: None,
            credentials: false,
        }
    }
}

impl CorsOptions {
    /// Returns the max-age header value, if one should be emitted.
    pub(crate) fn max_age_value(&self) -> Option<String> {
        self.max_age
            .filter(|seconds| *seconds > 0)
            .map(|seconds| seconds.to_string())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
