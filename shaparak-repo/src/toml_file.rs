//! TOML configuration loader.
//!
//! Reads the `shaparak` table: a string `mode` sets the global default
//! mode, and every sub-table is one driver's configuration.
//!
//! ```toml
//! [shaparak]
//! mode = "sandbox"
//!
//! [shaparak.saman]
//! merchantId = "A"
//!
//! [shaparak.saman.httpClientOptions]
//! timeout = 5
//! ```

use std::path::Path;

use shaparak_types::domain::driver::CONFIG_NAMESPACE;
use shaparak_types::{Configuration, DriverName, Mode, SourceError};

use crate::memory::InMemoryConfigSource;

/// Key of the global default mode inside the `shaparak` table.
const DEFAULT_MODE_KEY: &str = "mode";

/// Loads a configuration source from a TOML file.
pub fn from_toml_file(path: &Path) -> Result<InMemoryConfigSource, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let source = from_toml_str(&contents)?;
    tracing::info!(
        "Loaded configuration for {} driver(s) from {}",
        source.len(),
        path.display()
    );
    Ok(source)
}

/// Parses a configuration source from TOML text.
pub fn from_toml_str(input: &str) -> Result<InMemoryConfigSource, SourceError> {
    let root: toml::Table = input
        .parse()
        .map_err(|e: toml::de::Error| SourceError::Parse(e.to_string()))?;

    let source = InMemoryConfigSource::new();

    let Some(section) = root.get(CONFIG_NAMESPACE) else {
        tracing::warn!("No `[{}]` table found in configuration", CONFIG_NAMESPACE);
        return Ok(source);
    };
    let section = section.as_table().ok_or_else(|| {
        SourceError::Parse(format!("`{}` must be a table", CONFIG_NAMESPACE))
    })?;

    for (key, value) in section {
        match value {
            toml::Value::Table(table) => {
                let driver =
                    DriverName::parse(key).map_err(|e| SourceError::Parse(e.to_string()))?;
                let json =
                    serde_json::to_value(table).map_err(|e| SourceError::Parse(e.to_string()))?;
                let config = Configuration::try_from(json)
                    .map_err(|e| SourceError::Parse(e.to_string()))?;
                source.insert(driver, config);
            }
            toml::Value::String(raw) if key == DEFAULT_MODE_KEY => {
                source.set_default_mode(parse_mode(raw)?);
            }
            other => {
                return Err(SourceError::Parse(format!(
                    "unexpected {} for `{}.{}`",
                    other.type_str(),
                    CONFIG_NAMESPACE,
                    key
                )));
            }
        }
    }

    Ok(source)
}

/// An empty mode string means "unset", like an empty `SHAPARAK_MODE`.
fn parse_mode(raw: &str) -> Result<Option<Mode>, SourceError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(raw.parse()?))
}
