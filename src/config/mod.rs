// src/config/mod.rs
pub mod types;

pub use self::types::{ColumnConfig, Config, PropagationConfig, ReportConfig};

use crate::error::{ChainRankError, Result};
use crate::table::RANK_COLUMNS;
use std::fs;
use std::path::Path;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "chainrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `chainrank.toml` from the working directory, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ChainRankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses TOML content; missing sections and keys take their defaults.
    ///
    /// # Errors
    /// Returns error on malformed TOML or an invalid column layout.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if a column name is empty or two roles share a column.
    pub fn validate(&self) -> Result<()> {
        let cols = &self.columns;
        for (role, name) in [("group", &cols.group), ("item", &cols.item), ("index", &cols.index)] {
            if name.trim().is_empty() {
                return Err(ChainRankError::Config(format!("column name for `{role}` is empty")));
            }
        }
        if cols.group == cols.item || cols.group == cols.index || cols.item == cols.index {
            return Err(ChainRankError::Config(format!(
                "column roles must be distinct (group=`{}`, item=`{}`, index=`{}`)",
                cols.group, cols.item, cols.index
            )));
        }
        if RANK_COLUMNS.contains(&cols.item.as_str()) {
            return Err(ChainRankError::Config(format!(
                "item column `{}` clashes with a computed rank table column",
                cols.item
            )));
        }
        Ok(())
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
