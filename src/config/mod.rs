// src/config/mod.rs
pub mod types;

pub use self::types::{InputConfig, OutputConfig, SalesReportToml};

use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "salesreport.toml";

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory relative paths are resolved against.
    pub base_dir: PathBuf,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            verbose: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config rooted at `base_dir` with default file layout.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Loads `salesreport.toml` from `base_dir` if it exists, defaults otherwise.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::with_base_dir(base_dir);
        let path = config.base_dir.join(CONFIG_FILE);
        if path.exists() {
            config.load_file(&path)?;
        }
        Ok(config)
    }

    /// Overlays settings from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::io(e, path))?;
        self.parse_toml(&content)
            .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))
    }

    /// Replaces input/output settings with those in `content`.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or has unknown keys.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: SalesReportToml =
            toml::from_str(content).map_err(|e| ReportError::Config(e.to_string()))?;
        self.input = parsed.input;
        self.output = parsed.output;
        Ok(())
    }

    /// Checks that the settings name usable files.
    ///
    /// # Errors
    /// Returns error if a file name is empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("input.products_file", &self.input.products_file),
            ("input.salesmen_file", &self.input.salesmen_file),
            ("output.salesmen_report", &self.output.salesmen_report),
            ("output.products_report", &self.output.products_report),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ReportError::Config(format!("{key} must not be empty")));
            }
        }
        if self.output.salesmen_report == self.output.products_report {
            return Err(ReportError::Config(
                "output.salesmen_report and output.products_report must differ".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(&self.input.data_dir)
    }

    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir().join(&self.input.products_file)
    }

    #[must_use]
    pub fn salesmen_path(&self) -> PathBuf {
        self.data_dir().join(&self.input.salesmen_file)
    }

    #[must_use]
    pub fn sales_dir(&self) -> PathBuf {
        self.data_dir().join(&self.input.sales_dir)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output.output_dir)
    }
}
