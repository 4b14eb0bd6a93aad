use crate::domain::FilterOptions;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming an options file.
pub const CONFIG_ENV: &str = "FILTERDATE_CONFIG";

/// Where filter options are read from.
pub struct Config {
    pub options_path: Option<PathBuf>,
}

impl Config {
    /// `$FILTERDATE_CONFIG`, else `<config dir>/filterdate/config.json` when
    /// that file exists, else no file at all.
    pub fn from_env() -> Self {
        let options_path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                dirs::config_dir()
                    .map(|dir| dir.join("filterdate").join("config.json"))
                    .filter(|path| path.exists())
            });

        Self { options_path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            options_path: Some(path.into()),
        }
    }

    /// Options from the configured file, or all defaults without one.
    pub fn load_options(&self) -> Result<FilterOptions> {
        match &self.options_path {
            Some(path) => read_options(path),
            None => Ok(FilterOptions::default()),
        }
    }
}

pub fn read_options(path: &Path) -> Result<FilterOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter options: {}", path.display()))?;
    let options = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse filter options: {}", path.display()))?;
    log::debug!("Loaded filter options from {}", path.display());
    Ok(options)
}
