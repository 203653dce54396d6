pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "certlot")]
#[command(about = "Looks up lot validity for USP reference standards")]
pub struct CliConfig {
    /// Product codes, comma separated.
    #[arg(long, default_value = "")]
    pub codes: String,

    /// CSV file whose first column holds product codes (header row skipped).
    #[arg(long)]
    pub codes_file: Option<PathBuf>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Upper bound on waiting for the certificate region to render, per code.
    #[arg(long, default_value = "20")]
    pub wait_timeout_secs: u64,

    /// Explicit Chrome/Chromium binary; autodetected when omitted.
    #[arg(long)]
    pub chrome_binary: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn chrome_binary(&self) -> Option<&Path> {
        self.chrome_binary.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("wait_timeout_secs", self.wait_timeout_secs, 1)?;
        if let Some(file) = &self.codes_file {
            validation::validate_file_extension("codes_file", file, &["csv", "tsv"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            codes: "1234567".to_string(),
            codes_file: None,
            output_path: "./output".to_string(),
            wait_timeout_secs: 20,
            chrome_binary: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = base_config();
        config.wait_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spreadsheet_codes_file_is_rejected() {
        let mut config = base_config();
        config.codes_file = Some(PathBuf::from("codes.xlsx"));
        assert!(config.validate().is_err());
    }
}
