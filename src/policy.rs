use crate::constants::status;
use crate::context::{CorsContext, RequestContext};
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::result::{CorsDecision, CorsError, Flow, PreflightResult, SimpleResult};
use std::future::Future;
use tracing::{debug, trace, warn};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// The policy holds no per-request state and can be shared across threads.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Decides which headers a request receives without touching any response.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        let decision = if request.is_preflight() {
            CorsDecision::Preflight(self.evaluate_preflight(request)?)
        } else {
            CorsDecision::Simple(self.evaluate_simple(request)?)
        };

        debug!(
            method = request.method,
            origin = request.origin().unwrap_or_default(),
            preflight = matches!(decision, CorsDecision::Preflight(_)),
            headers = decision.headers().len(),
            "evaluated CORS request"
        );

        Ok(decision)
    }

    /// Writes the decision for the context's request onto the context.
    ///
    /// Preflight requests get a `204` status and [`Flow::Halt`]; every other
    /// request returns [`Flow::Continue`] with the status left untouched.
    pub fn apply<C>(&self, ctx: &mut C) -> Result<Flow, CorsError>
    where
        C: CorsContext + ?Sized,
    {
        let decision = match self.evaluate(&ctx.request()) {
            Ok(decision) => decision,
            Err(error) => {
                warn!(%error, "CORS origin resolution failed");
                return Err(error);
            }
        };

        match decision {
            CorsDecision::Preflight(result) => {
                for (name, value) in result.headers {
                    trace!(header = %name, %value, "applying preflight header");
                    ctx.set_header(name, value);
                }
                ctx.set_status(result.status);
                Ok(Flow::Halt)
            }
            CorsDecision::Simple(result) => {
                for (name, value) in result.headers {
                    trace!(header = %name, %value, "applying CORS header");
                    ctx.set_header(name, value);
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs the policy as a middleware step: applies the decision, then either
    /// stops (preflight) or awaits `next`, returning its result unchanged.
    pub async fn handle<'c, C, F, Fut, E>(&self, ctx: &'c mut C, next: F) -> Result<(), E>
    where
        C: CorsContext + ?Sized,
        F: FnOnce(&'c mut C) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: From<CorsError>,
    {
        match self.apply(&mut *ctx)? {
            Flow::Halt => Ok(()),
            Flow::Continue => next(ctx).await,
        }
    }

    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<PreflightResult, CorsError> {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_header(request)?);
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_credentials_header());

        Ok(PreflightResult {
            headers: headers.into_headers(),
            status: status::NO_CONTENT,
        })
    }

    fn evaluate_simple(&self, request: &RequestContext<'_>) -> Result<SimpleResult, CorsError> {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_header(request)?);
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_credentials_header());

        Ok(SimpleResult {
            headers: headers.into_headers(),
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
