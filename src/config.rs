use serde::Deserialize;
use std::{fs, io, path::PathBuf};

use rchess::ui::GlyphSet;
use thiserror::Error;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one saved game per player.
    pub data_dir: PathBuf,
    pub default_owner: String,
    pub glyphs: GlyphSet,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".rchess".into(),
            default_owner: "player".into(),
            glyphs: GlyphSet::Unicode,
        }
    }
}

impl Config {
    /// Defaults, overridden by the YAML file at `path` when it exists.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(p) = path {
            if p.exists() {
                let content = fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.clone(),
                    source,
                })?;
                cfg = Self::parse(&content).map_err(|source| ConfigError::Parse {
                    path: p.clone(),
                    source,
                })?;
            }
        }
        Ok(cfg)
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
