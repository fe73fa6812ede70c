pub mod constants;
mod config;
mod context;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use config::{ConfigError, NormalizedConfig, validate_config};
pub use context::{CorsContext, RequestContext};
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{BoxError, Origin, OriginCallbackFn};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, CorsError, Flow, PreflightResult, SimpleResult};
