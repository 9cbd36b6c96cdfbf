//! # Shaparak Repository
//!
//! Persisted configuration sources implementing the `ConfigSource` port.
//!
//! - `memory` - `DashMap`-backed store, updatable at runtime
//! - `toml_file` - loader for the `[shaparak.*]` TOML layout

use std::path::Path;

use shaparak_types::SourceError;

pub mod memory;
pub mod toml_file;

pub use memory::InMemoryConfigSource;
pub use toml_file::{from_toml_file, from_toml_str};

/// Build a configuration source from an optional TOML file.
///
/// Without a path the source starts empty; drivers can then only be
/// dispatched with a runtime override or after `insert`.
///
/// # Examples
///
/// ```ignore
/// let source = build_config_source(Some(Path::new("shaparak.toml")))?;
/// ```
pub fn build_config_source(path: Option<&Path>) -> Result<InMemoryConfigSource, SourceError> {
    match path {
        Some(path) => from_toml_file(path),
        None => {
            tracing::debug!("No configuration file given, starting with an empty source");
            Ok(InMemoryConfigSource::new())
        }
    }
}
