//! Loading of the language tables from disk.
//!
//! The language list is a text file with one id per line, in the order
//! suggestions should be offered. Everything else lives in a TOML file:
//!
//! ```toml
//! [aliases]
//! golang = "go"
//!
//! [defaults]
//! python = "python3"
//!
//! [wrapping]
//! excluded = ["cs-csi"]
//!
//! [wrapping.templates]
//! rust = "fn main() {\n{code}\n}"
//! ```

use code_exec::{LanguageCatalog, WrapTemplates};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid tables file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Tables(#[from] code_exec::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct TablesFile {
    /// Extra aliases, layered over the built-in ones
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    #[serde(default)]
    pub defaults: HashMap<String, String>,

    /// Replaces the built-in templates when present
    pub wrapping: Option<WrappingSection>,
}

#[derive(Debug, Deserialize)]
pub struct WrappingSection {
    pub templates: HashMap<String, String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl TablesFile {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::parse(&read(path)?)
    }

    pub fn catalog(&self, languages: Vec<String>) -> Result<LanguageCatalog, ConfigError> {
        let mut aliases = LanguageCatalog::default_aliases();
        aliases.extend(self.aliases.clone());

        Ok(LanguageCatalog::new(
            languages,
            aliases,
            self.defaults.clone(),
        )?)
    }

    pub fn templates(&self) -> Result<WrapTemplates, ConfigError> {
        match &self.wrapping {
            Some(section) => Ok(WrapTemplates::new(
                section.templates.clone(),
                section.excluded.clone(),
            )?),
            None => Ok(WrapTemplates::default()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the language list, one id per line.
pub fn load_languages(path: &Path) -> Result<Vec<String>, ConfigError> {
    Ok(read(path)?.lines().map(str::to_string).collect())
}

/// Loads both tables, ready to hand to the execution service.
pub fn load_tables(
    languages_path: &Path,
    tables_path: &Path,
) -> Result<(LanguageCatalog, WrapTemplates), ConfigError> {
    let tables = TablesFile::load(tables_path)?;
    let catalog = tables.catalog(load_languages(languages_path)?)?;
    let templates = tables.templates()?;

    info!(
        "Loaded {} languages ({} usable as commands)",
        catalog.len(),
        catalog.command_names().len()
    );
    Ok((catalog, templates))
}
