use crate::options::CorsOptions;
use crate::origin::Origin;
use crate::policy::CorsPolicy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

const KNOWN_FIELDS: &[&str] = &[
    "enabled",
    "origin",
    "allowMethods",
    "allowHeaders",
    "exposeHeaders",
    "maxAge",
    "credentials",
];

/// Shallow, normalized view of loosely typed CORS options.
///
/// Only the fields that were provided are populated; defaulting is left to
/// [`NormalizedConfig::into_options`]. The outer `Option` tracks presence and
/// the inner one an explicit `null`, which switches the setting off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_methods: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Option<bool>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    enabled: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    origin: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    allow_methods: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    allow_headers: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    expose_headers: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    max_age: Option<Option<u64>>,
    #[serde(default, deserialize_with = "present")]
    credentials: Option<Option<bool>>,
}

// Only called for keys that exist, so `null` lands in the inner `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Errors that can be produced while normalizing loosely typed options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CORS options must be null, a boolean or an object, but {kind} was given.")]
    UnsupportedInput { kind: &'static str },
    #[error("The CORS option '{field}' is not recognized.")]
    UnknownField { field: String },
    #[error("A CORS option has an invalid type: {message}")]
    InvalidField { message: String },
}

/// Normalizes `raw` into a [`NormalizedConfig`] carrying an explicit `enabled` flag.
///
/// * absent or `null` disables the feature
/// * a boolean sets `enabled` and nothing else
/// * an object is enabled unless it says `"enabled": false`; other provided
///   fields are carried through unchanged
///
/// Any other JSON type is rejected rather than spread into a degenerate config.
pub fn validate_config(raw: Option<&Value>) -> Result<NormalizedConfig, ConfigError> {
    let result = match raw {
        None | Some(Value::Null) => Ok(NormalizedConfig::default()),
        Some(Value::Bool(enabled)) => Ok(NormalizedConfig {
            enabled: *enabled,
            ..NormalizedConfig::default()
        }),
        Some(value @ Value::Object(map)) => {
            match map
                .keys()
                .find(|key| !KNOWN_FIELDS.contains(&key.as_str()))
            {
                Some(field) => Err(ConfigError::UnknownField {
                    field: field.clone(),
                }),
                None => RawOptions::deserialize(value)
                    .map(NormalizedConfig::from)
                    .map_err(|error| ConfigError::InvalidField {
                        message: error.to_string(),
                    }),
            }
        }
        Some(other) => Err(ConfigError::UnsupportedInput {
            kind: json_kind(other),
        }),
    };

    if let Err(error) = &result {
        tracing::warn!(%error, "rejected CORS options");
    }

    result
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<RawOptions> for NormalizedConfig {
    fn from(raw: RawOptions) -> Self {
        Self {
            enabled: raw.enabled != Some(false),
            origin: raw.origin,
            allow_methods: raw.allow_methods,
            allow_headers: raw.allow_headers,
            expose_headers: raw.expose_headers,
            max_age: raw.max_age,
            credentials: raw.credentials,
        }
    }
}

impl NormalizedConfig {
    /// Merges the provided fields over `defaults`. Returns `None` when disabled.
    ///
    /// A field set to `null` turns its header off instead of falling back to
    /// the default: no origin, empty lists, no max-age, no credentials.
    pub fn into_options(self, defaults: CorsOptions) -> Option<CorsOptions> {
        if !self.enabled {
            return None;
        }

        Some(CorsOptions {
            origin: match self.origin {
                Some(Some(value)) => Origin::from_config(value),
                Some(None) => Origin::none(),
                None => defaults.origin,
            },
            allow_methods: merge(self.allow_methods, defaults.allow_methods),
            allow_headers: merge(self.allow_headers, defaults.allow_headers),
            expose_headers: merge(self.expose_headers, defaults.expose_headers),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            credentials: merge(self.credentials, defaults.credentials),
        })
    }

    /// Builds a policy from the merged options, or `None` when CORS is disabled
    /// and the middleware should not be installed.
    pub fn into_policy(self, defaults: CorsOptions) -> Option<CorsPolicy> {
        self.into_options(defaults).map(CorsPolicy::new)
    }
}

fn merge<T: Default>(provided: Option<Option<T>>, default: T) -> T {
    match provided {
        Some(value) => value.unwrap_or_default(),
        None => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
