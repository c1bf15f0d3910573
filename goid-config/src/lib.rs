//! Settings for reading GO list files.
//!
//! Two tables: `[reader]` holds the [`ReaderOptions`] knobs (default section
//! name, whether to drop it, whether to ignore markers) and `[output]` picks
//! the result format and silences the read report. The baseline values come
//! from `defaults/goids.default.toml`, compiled in; a user file and single-key
//! overrides from the command line go on top of it through [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use goid_reader::ReaderOptions;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/goids.default.toml");

/// Everything the `goids` binary reads from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoidsConfig {
    pub reader: ReaderConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ReaderOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub default_section: String,
    pub exclude_default_section: bool,
    pub identifiers_only: bool,
}

impl From<ReaderConfig> for ReaderOptions {
    fn from(config: ReaderConfig) -> Self {
        ReaderOptions {
            identifiers_only: config.identifiers_only,
            exclude_default_section: config.exclude_default_section,
            default_section: config.default_section,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["text", "json", "yaml"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown output format '{}' (expected one of: {})",
                other,
                Self::ALL.join(", ")
            )),
        }
    }
}

/// Stacks a user file and per-key overrides on the compiled-in settings.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Starts from `goids.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Adds a TOML file on top; `build` fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Adds a TOML file on top if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Sets one dotted key, e.g. `reader.default_section`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GoidsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in settings with nothing layered on top.
pub fn load_defaults() -> Result<GoidsConfig, ConfigError> {
    Loader::new().build()
}
