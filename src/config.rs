#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, OnceLock},
};

use crate::{report::OutputFormat, types::LineBounds};

/// Process-wide defaults, read once from the environment.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Default accepted line range.
    line_bounds:   LineBounds,
    /// Word list replacing the embedded dictionary, if any.
    dictionary:    Option<PathBuf>,
    /// Default report format.
    output_format: OutputFormat,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            line_bounds:   LineBounds::default(),
            dictionary:    None,
            output_format: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Builds a configuration from `ESSAY_*` environment variables, keeping
    /// the default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let line_bounds = LineBounds::new(
            read_parsed(&lookup, "ESSAY_MIN_LINES", defaults.line_bounds.min),
            read_parsed(&lookup, "ESSAY_MAX_LINES", defaults.line_bounds.max),
        );

        let dictionary = lookup("ESSAY_DICTIONARY")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let output_format =
            read_parsed(&lookup, "ESSAY_OUTPUT_FORMAT", defaults.output_format);

        Self {
            line_bounds,
            dictionary,
            output_format,
        }
    }

    /// Returns the default line bounds.
    pub fn line_bounds(&self) -> LineBounds {
        self.line_bounds
    }

    /// Returns the configured dictionary path, if any.
    pub fn dictionary(&self) -> Option<&Path> {
        self.dictionary.as_deref()
    }

    /// Returns the default report format.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

/// Shared configuration handle.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Arc<ConfigState>> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let cfg = CONFIG_SLOT.get_or_init(|| {
        let cfg = ConfigState::from_env();
        tracing::debug!(?cfg, "configuration loaded");
        Arc::new(cfg)
    });
    ConfigHandle(Arc::clone(cfg))
}

/// Returns the configured default line bounds.
pub fn line_bounds() -> LineBounds {
    get().line_bounds()
}

/// Returns the configured dictionary path.
pub fn dictionary() -> Option<PathBuf> {
    get().dictionary().map(Path::to_path_buf)
}

/// Returns the configured default report format.
pub fn output_format() -> OutputFormat {
    get().output_format()
}

/// Parses `key` from `lookup`, falling back to `default` when the value is
/// missing or does not parse.
fn read_parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!("Ignoring {key}={value}: could not parse it");
            default
        }),
        None => default,
    }
}
