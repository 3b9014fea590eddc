use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadronizadorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No configured workbook produced any data rows")]
    EmptyRun,
}

pub type Result<T> = std::result::Result<T, PadronizadorError>;
