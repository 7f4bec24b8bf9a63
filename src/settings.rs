use crate::error::{LifeError, Result};
use crate::pattern::{Catalog, Pattern};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional defaults and extra patterns read from `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub dimensions: Option<usize>,
    pub pattern: Option<String>,
    pub interval: Option<String>,
    /// Name -> pattern text, merged over the builtin catalog
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl Settings {
    /// Load from an explicit path (must exist) or the default location
    /// (missing means defaults).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no settings file");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| LifeError::Settings {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let settings = Self::parse(&content).map_err(|message| LifeError::Settings {
            path: path.clone(),
            message,
        })?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }

    /// Builtin catalog extended with the patterns defined here
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();
        for (name, text) in &self.patterns {
            let pattern = Pattern::parse(text).map_err(|e| match e {
                LifeError::InvalidPattern(msg) => {
                    LifeError::InvalidPattern(format!("{}: {}", name, msg))
                }
                other => other,
            })?;
            catalog.insert(name.clone(), pattern);
        }
        Ok(catalog)
    }
}
