// src/cli.rs
use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "salesreport", version, about = "Builds ranked salesman and product reports from sales files")]
pub struct Cli {
    /// Read settings from this file instead of ./salesreport.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the products, salesmen and sales inputs
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the run config: defaults, then the config file, then flags.
    ///
    /// # Errors
    /// Returns error if a config file cannot be read or parsed.
    pub fn resolve(&self, base_dir: &Path) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut c = Config::with_base_dir(base_dir);
                c.load_file(&base_dir.join(path))?;
                c
            }
            None => Config::load(base_dir)?,
        };

        if let Some(dir) = &self.data_dir {
            config.input.data_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(dir) = &self.output_dir {
            config.output.output_dir = dir.to_string_lossy().into_owned();
        }
        config.verbose = self.verbose;
        Ok(config)
    }
}
