//! Settings: defaults, overridden by an optional TOML file, then by flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use linediff_engine::DiffOptions;
use linediff_render::PrinterConfig;

use crate::cli::{Cli, Command};

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// When to color the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub color: ColorChoice,
    /// Width of the line number columns.
    pub line_width: usize,
    /// Lines of context around changes; `None` prints the full listing.
    pub context: Option<usize>,
    /// Maximum number of lines across both inputs.
    pub max_lines: Option<usize>,
    /// Maximum edit distance to search.
    pub max_distance: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            line_width: PrinterConfig::default().line_width,
            context: None,
            max_lines: None,
            max_distance: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(path, &text)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Settings for one invocation: the config file if given, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(color) = cli.command.color() {
            settings.color = color;
        }
        if let Command::Diff(args) = &cli.command {
            if args.context.is_some() {
                settings.context = args.context;
            }
        }
        Ok(settings)
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            max_lines: self.max_lines,
            max_distance: self.max_distance,
        }
    }

    pub fn printer_config(&self, colorize: bool) -> PrinterConfig {
        PrinterConfig {
            colorize,
            line_width: self.line_width,
        }
    }
}
