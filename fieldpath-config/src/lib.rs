//! Shared configuration loader for the fieldpath toolchain.
//!
//! `defaults/fieldpath.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FieldpathConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use fieldpath_parser::fields::{FieldsParser, MarkerError, Markers};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/fieldpath.default.toml");

/// Top-level configuration consumed by fieldpath applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldpathConfig {
    pub markers: MarkersConfig,
    pub expansion: ExpansionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkersConfig {
    pub open: String,
    pub close: String,
    pub delimiter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Zero means unbounded
    pub max_expanded_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print parameter values decoded rather than as written
    pub decode_params: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Lines,
    Json,
    Yaml,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid markers: {0}")]
    Markers(#[from] MarkerError),
}

impl FieldpathConfig {
    /// Validated markers from the `[markers]` table
    pub fn markers(&self) -> Result<Markers, MarkerError> {
        Markers::new(
            self.markers.open.as_str(),
            self.markers.close.as_str(),
            self.markers.delimiter.as_str(),
        )
    }

    /// A parser configured from the `[markers]` and `[expansion]` tables
    pub fn parser(&self) -> Result<FieldsParser, MarkerError> {
        let parser = FieldsParser::new().with_markers(self.markers()?);
        Ok(match self.expansion.max_expanded_len {
            0 => parser,
            limit => parser.with_max_expanded_len(limit),
        })
    }
}

/// Builds a [`FieldpathConfig`] from the embedded defaults plus whatever a
/// project file or the command line changes (markers, bound, output).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `fieldpath.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Adds a TOML file whose tables replace matching default keys. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Adds a TOML file such as a per-project `fieldpath.toml`, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Sets one dotted key, e.g. `markers.delimiter` from `--delimiter`. Applied last.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merges every layer and deserializes it. Marker validation happens later, in
    /// [`FieldpathConfig::markers`].
    pub fn build(self) -> Result<FieldpathConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone: default markers, no bound, `lines` output.
pub fn load_defaults() -> Result<FieldpathConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults plus an optional user file, validated down to a parser.
pub fn load_parser(path: Option<&Path>) -> Result<(FieldpathConfig, FieldsParser), LoadError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    let config = loader.build()?;
    let parser = config.parser()?;
    Ok((config, parser))
}
