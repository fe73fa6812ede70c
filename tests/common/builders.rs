use bunner_cors_middleware::constants::method;
use bunner_cors_middleware::{CorsDecision, CorsOptions, CorsPolicy, Origin, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    origin: Option<Origin>,
    allow_methods: Option<Vec<String>>,
    allow_headers: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    max_age: Option<u64>,
    credentials: Option<bool>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let CorsOptions {
            origin: default_origin,
            allow_methods: default_allow_methods,
            allow_headers: default_allow_headers,
            expose_headers: default_expose_headers,
            max_age: default_max_age,
            credentials: default_credentials,
        } = CorsOptions::default();

        CorsPolicy::new(CorsOptions {
            origin: self.origin.unwrap_or(default_origin),
            allow_methods: self.allow_methods.unwrap_or(default_allow_methods),
            allow_headers: self.allow_headers.unwrap_or(default_allow_headers),
            expose_headers: self.expose_headers.unwrap_or(default_expose_headers),
            max_age: self.max_age.or(default_max_age),
            credentials: self.credentials.unwrap_or(default_credentials),
        })
    }
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

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
        };
        policy
            .evaluate(&ctx)
            .expect("simple request evaluation should succeed")
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
        };
        policy
            .evaluate(&ctx)
            .expect("preflight request evaluation should succeed")
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
