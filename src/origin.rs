use crate::constants::WILDCARD;
use crate::context::RequestContext;
use crate::result::CorsError;
use std::fmt;
use std::sync::Arc;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type OriginCallbackFn =
    dyn for<'a> Fn(&RequestContext<'a>) -> Result<Option<String>, BoxError> + Send + Sync;

/// Source of the `Access-Control-Allow-Origin` value.
#[derive(Clone, Default)]
pub enum Origin {
    /// Reflect the request `Origin`, falling back to `*` when it is absent.
    #[default]
    Wildcard,
    /// Emit the configured value verbatim on every response.
    Literal(String),
    /// Compute the value per request. `None` or an empty string emits nothing.
    Dynamic(Arc<OriginCallbackFn>),
}

impl Origin {
    pub fn wildcard() -> Self {
        Self::Wildcard
    }

    /// Fixed origin value. `"*"` is the wildcard and still reflects the
    /// request `Origin`, same as [`Origin::from_config`].
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::from_config(value)
    }

    /// Never advertises an origin.
    pub fn none() -> Self {
        Self::Literal(String::new())
    }

    pub fn dynamic<F>(callback: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> Result<Option<String>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        Self::Dynamic(Arc::new(callback))
    }

    /// Maps a configured string onto a variant; `"*"` selects [`Origin::Wildcard`].
    pub fn from_config<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        if value == WILDCARD {
            Self::Wildcard
        } else {
            Self::Literal(value)
        }
    }

    /// Resolves the value to advertise for `ctx`. `Ok(None)` means no
    /// `Access-Control-Allow-Origin` header is emitted.
    pub fn resolve(&self, ctx: &RequestContext<'_>) -> Result<Option<String>, CorsError> {
        let resolved = match self {
            Origin::Wildcard => Some(ctx.origin().unwrap_or(WILDCARD).to_string()),
            Origin::Literal(value) => Some(value.clone()),
            Origin::Dynamic(callback) => callback(ctx).map_err(CorsError::Origin)?,
        };

        Ok(resolved.filter(|value| !value.is_empty()))
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Wildcard => f.write_str("Wildcard"),
            Origin::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Origin::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::from_config(value)
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::from_config(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
