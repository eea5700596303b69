use crate::err::BracketError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub balanced: usize,
    pub scrambled: usize,
    pub max_length: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            balanced: 10,
            scrambled: 10,
            max_length: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skip non-bracket characters instead of rejecting the input
    pub lenient: bool,
    pub generate: GenerateConfig,
}

impl Config {
    pub fn default_paths() -> Result<Vec<PathBuf>, BracketError> {
        let config_dir = dirs::config_dir()
            .ok_or(BracketError::ConfigNotFound)?
            .join("bracketex");

        Ok(vec![
            config_dir.join("config.toml"),
            config_dir.join("config.json"),
        ])
    }

    /// Loads the first config file that exists in the user's config directory,
    /// or the defaults if there is none.
    pub fn parse() -> Result<Self, BracketError> {
        let paths = match Self::default_paths() {
            Ok(paths) => paths,
            Err(_) => return Ok(Self::default()),
        };

        match paths.iter().find(|p| p.exists()) {
            Some(path) => Self::from_path(path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, BracketError> {
        if !path.exists() {
            return Err(BracketError::ConfigNotFound);
        }

        tracing::info!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path)?;
        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| BracketError::ParsingError(e.to_string()))?
            }

            Some("json") => serde_json::from_str(&content)
                .map_err(|e| BracketError::ParsingError(e.to_string()))?,

            _ => {
                return Err(BracketError::ParsingError(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            }
        };

        Ok(config)
    }
}
