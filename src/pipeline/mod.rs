pub mod coerce;
pub mod normalize;
pub mod workbook;

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::{PadronizadorError, Result};
use crate::export;
use crate::schema::SchemaDictionary;
use crate::types::CanonicalRecord;

use self::workbook::WorkbookReader;

/// Per-run totals reported back to the caller.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_per_year: Vec<(String, usize)>,
    pub total_rows: usize,
    pub output_file: PathBuf,
}

/// Drives one full consolidation run: every configured year in order, one
/// workbook at a time, then a single CSV export.
pub struct Pipeline {
    config: Config,
    schema: SchemaDictionary,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            schema: SchemaDictionary::new(),
        }
    }

    /// Runs the whole consolidation. A workbook that cannot be opened, or a
    /// run in which no sheet yields any row, aborts with an error rather
    /// than publishing an incomplete dataset.
    pub fn run(&self) -> Result<RunSummary> {
        let reader = WorkbookReader::new(&self.schema);
        let mut records: Vec<CanonicalRecord> = Vec::new();
        let mut rows_per_year = Vec::new();

        for source in &self.config.years {
            let path = self.config.workbook_path(source);
            info!(year = %source.label, file = %path.display(), "Processing year");

            let year_records = reader.read_workbook(&path, &source.label)?;
            rows_per_year.push((source.label.clone(), year_records.len()));
            records.extend(year_records);
        }

        if records.is_empty() {
            return Err(PadronizadorError::EmptyRun);
        }

        let output_file = self.config.output_path();
        export::write_csv(&output_file, &records)?;
        info!(rows = records.len(), file = %output_file.display(), "Consolidated dataset written");

        Ok(RunSummary {
            total_rows: records.len(),
            rows_per_year,
            output_file,
        })
    }
}
