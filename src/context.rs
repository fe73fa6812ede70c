/// Request metadata the policy reads while evaluating a single request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    /// Returns the `Origin` header value, treating an empty value as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
    }
}

/// Adapter a host framework implements so the policy can read the incoming
/// request and write the outgoing response for one in-flight request.
pub trait CorsContext {
    fn request(&self) -> RequestContext<'_>;

    fn set_header(&mut self, name: &'static str, value: String);

    fn set_status(&mut self, status: u16);
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
