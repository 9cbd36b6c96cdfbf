//! Driver configuration mappings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use super::mode::Mode;
use crate::error::DispatchError;

/// Configuration key holding the per-driver operating mode.
pub const MODE_KEY: &str = "mode";

/// Configuration key holding HTTP client options.
pub const HTTP_CLIENT_OPTIONS_KEY: &str = "httpClientOptions";

/// Option name → value mapping for one driver.
///
/// Values are kept as JSON so bank adapters can read whatever keys their
/// protocol needs (merchant ids, terminal ids, credentials, endpoints).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a string value, or `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Sets a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`Configuration::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Reads the `mode` entry. Absent, null or blank means "not configured".
    pub fn mode(&self) -> Result<Option<Mode>, DispatchError> {
        match self.0.get(MODE_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
            Some(Value::String(raw)) => raw.parse().map(Some).map_err(|e| {
                DispatchError::InvalidConfiguration {
                    key: MODE_KEY.to_string(),
                    reason: format!("{}", e),
                }
            }),
            Some(other) => Err(DispatchError::InvalidConfiguration {
                key: MODE_KEY.to_string(),
                reason: format!("expected a string, got {}", other),
            }),
        }
    }

    /// Reads the `httpClientOptions` entry, defaulting to an empty mapping.
    pub fn http_client_options(&self) -> Result<HttpClientOptions, DispatchError> {
        match self.0.get(HTTP_CLIENT_OPTIONS_KEY) {
            None | Some(Value::Null) => Ok(HttpClientOptions::default()),
            Some(Value::Object(map)) => Ok(HttpClientOptions(map.clone())),
            Some(other) => Err(DispatchError::InvalidConfiguration {
                key: HTTP_CLIENT_OPTIONS_KEY.to_string(),
                reason: format!("expected a mapping, got {}", other),
            }),
        }
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Configuration {
    type Error = DispatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DispatchError::InvalidConfiguration {
                key: "configuration".to_string(),
                reason: format!("expected a mapping, got {}", other),
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// HTTP client options handed to a provider alongside its configuration.
///
/// Recognised keys are `timeout` and `connectTimeout` (seconds), `proxy`,
/// `verify` and `userAgent`. Anything else is kept verbatim for the adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HttpClientOptions(Map<String, Value>);

impl HttpClientOptions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Total request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.seconds("timeout")
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.seconds("connectTimeout")
    }

    pub fn proxy(&self) -> Option<&str> {
        self.0.get("proxy").and_then(Value::as_str)
    }

    /// Whether TLS certificates are verified; `None` leaves the client default.
    pub fn verify(&self) -> Option<bool> {
        self.0.get("verify").and_then(Value::as_bool)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.0.get("userAgent").and_then(Value::as_str)
    }

    fn seconds(&self, key: &str) -> Option<Duration> {
        self.0
            .get(key)
            .and_then(Value::as_f64)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

impl From<Map<String, Value>> for HttpClientOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> Configuration {
        Configuration::try_from(value).unwrap()
    }

    #[test]
    fn test_mode_absent_is_none() {
        assert_eq!(config(json!({"merchantId": "A"})).mode().unwrap(), None);
        assert_eq!(config(json!({"mode": null})).mode().unwrap(), None);
    }

    #[test]
    fn test_blank_mode_is_none() {
        assert_eq!(config(json!({"mode": ""})).mode().unwrap(), None);
        assert_eq!(config(json!({"mode": "  "})).mode().unwrap(), None);
    }

    #[test]
    fn test_mode_parsed() {
        let cfg = config(json!({"mode": "sandbox"}));
        assert_eq!(cfg.mode().unwrap(), Some(Mode::Sandbox));
    }

    #[test]
    fn test_invalid_mode_names_the_key() {
        let err = config(json!({"mode": 1})).mode().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidConfiguration { ref key, .. } if key == "mode"
        ));

        let err = config(json!({"mode": "staging"})).mode().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_http_client_options_default_empty() {
        let opts = config(json!({"merchantId": "A"}))
            .http_client_options()
            .unwrap();
        assert!(opts.is_empty());
    }

    #[test]
    fn test_http_client_options_extracted() {
        let cfg = config(json!({
            "httpClientOptions": {"timeout": 5, "verify": false, "retries": 3}
        }));
        let opts = cfg.http_client_options().unwrap();
        assert_eq!(opts.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(opts.verify(), Some(false));
        assert_eq!(opts.get("retries"), Some(&json!(3)));
        assert_eq!(opts.connect_timeout(), None);
    }

    #[test]
    fn test_out_of_range_timeouts_are_ignored() {
        let opts = config(json!({
            "httpClientOptions": {"timeout": 1e30, "connectTimeout": 1e30}
        }))
        .http_client_options()
        .unwrap();
        assert_eq!(opts.timeout(), None);
        assert_eq!(opts.connect_timeout(), None);

        let opts = config(json!({"httpClientOptions": {"timeout": -1, "connectTimeout": "5"}}))
            .http_client_options()
            .unwrap();
        assert_eq!(opts.timeout(), None);
        assert_eq!(opts.connect_timeout(), None);
    }

    #[test]
    fn test_http_client_options_must_be_mapping() {
        let err = config(json!({"httpClientOptions": "fast"}))
            .http_client_options()
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidConfiguration { ref key, .. } if key == "httpClientOptions"
        ));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Configuration::try_from(json!([1, 2])).is_err());
    }
}
