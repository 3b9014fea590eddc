use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{PadronizadorError, Result};

/// Pipeline configuration: where the yearly workbooks live and where the
/// consolidated CSV goes. Years are listed in processing order.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory holding the input workbooks and receiving the output file.
    pub base_dir: PathBuf,
    /// Output file name, relative to `base_dir`.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Year labels and their workbook files.
    pub years: Vec<YearSource>,
}

#[derive(Debug, Deserialize)]
pub struct YearSource {
    /// Year label recorded as provenance on every row of that workbook.
    pub label: String,
    /// Workbook file name, relative to `base_dir`.
    pub file: String,
}

fn default_output_file() -> String {
    "trabalho_sp_padronizado.csv".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PadronizadorError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;

        let config: Config = toml::from_str(&content)?;
        if config.years.is_empty() {
            return Err(PadronizadorError::Config(
                "No yearly workbooks configured".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn workbook_path(&self, source: &YearSource) -> PathBuf {
        self.base_dir.join(&source.file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        base_dir = "data"

        [[years]]
        label = "2022"
        file = "controle-2022.xlsx"

        [[years]]
        label = "2023"
        file = "controle-2023.xlsx"
    "#;

    #[test]
    fn parses_years_in_listed_order() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let labels: Vec<&str> = config.years.iter().map(|y| y.label.as_str()).collect();
        assert_eq!(labels, ["2022", "2023"]);
        assert_eq!(
            config.workbook_path(&config.years[0]),
            PathBuf::from("data/controle-2022.xlsx")
        );
    }

    #[test]
    fn output_file_defaults_when_omitted() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(
            config.output_path(),
            PathBuf::from("data/trabalho_sp_padronizado.csv")
        );
    }

    #[test]
    fn load_rejects_empty_year_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_dir = \"data\"\nyears = []").unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PadronizadorError::Config(_)));
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = Config::load("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, PadronizadorError::Config(_)));
    }
}
