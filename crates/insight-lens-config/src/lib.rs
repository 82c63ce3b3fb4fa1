use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),

    #[error("answers_path in {config_path} is empty")]
    EmptyAnswersPath { config_path: PathBuf },

    #[error("answers_path '{answers_path}' in {config_path} uses unset variable ${var_name}")]
    UnresolvedVariable {
        config_path: PathBuf,
        answers_path: String,
        var_name: String,
    },

    #[error("answers_path '{}' in {config_path} does not exist", answers_path.display())]
    MissingAnswersPath {
        config_path: PathBuf,
        answers_path: PathBuf,
    },
}

/// Where saved query answers live.
///
/// `answers_path` may be a directory of answer files or a single answer
/// file. `~` and `$VAR` are expanded when the config is loaded, and a
/// loaded config always points at something that exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub answers_path: PathBuf,
}

impl Config {
    pub fn new(answers_path: impl Into<PathBuf>) -> Self {
        Self {
            answers_path: answers_path.into(),
        }
    }

    /// Loads and validates the config at `config_path`.
    ///
    /// Returns `Ok(None)` when no config file exists.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let raw: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let answers_path = resolve_answers_path(config_path, &raw.answers_path)?;
        Ok(Some(Self { answers_path }))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config to `config_path`, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source: std::io::Error| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)
    }

    /// Records `self` at `config_path` unless a config is already there.
    ///
    /// Returns true if the file was written. An existing config is never
    /// overwritten, so a path passed once on the command line becomes the
    /// default only on first run.
    pub fn save_if_absent<P: AsRef<Path>>(&self, config_path: P) -> Result<bool, ConfigError> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Ok(false);
        }
        self.save_to_path(config_path)?;
        Ok(true)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/insight-lens");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

fn resolve_answers_path(config_path: &Path, answers_path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = answers_path.to_string_lossy();
    if raw.trim().is_empty() {
        return Err(ConfigError::EmptyAnswersPath {
            config_path: config_path.to_path_buf(),
        });
    }

    let expanded = shellexpand::full(&raw).map_err(|e| ConfigError::UnresolvedVariable {
        config_path: config_path.to_path_buf(),
        answers_path: raw.to_string(),
        var_name: e.var_name,
    })?;
    let expanded = PathBuf::from(expanded.as_ref());

    if !expanded.exists() {
        return Err(ConfigError::MissingAnswersPath {
            config_path: config_path.to_path_buf(),
            answers_path: expanded,
        });
    }
    Ok(expanded)
}
