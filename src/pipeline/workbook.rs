use std::path::Path;

use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use tracing::{debug, info};

use crate::error::Result;
use crate::schema::SchemaDictionary;
use crate::types::{CanonicalRecord, RawSheet};

use super::normalize::SheetNormalizer;

/// Sheets whose label starts with this token (any casing) hold
/// administrative notes, not activity data.
const NOTES_SHEET_PREFIX: &str = "observ";

/// Reads one spreadsheet workbook and hands every data sheet to the
/// normalizer, concatenating the results in sheet order.
pub struct WorkbookReader<'a> {
    schema: &'a SchemaDictionary,
}

impl<'a> WorkbookReader<'a> {
    pub fn new(schema: &'a SchemaDictionary) -> Self {
        Self { schema }
    }

    /// Processes every data sheet of the workbook at `path` under the given
    /// year label. Notes sheets and sheets with no surviving rows are
    /// skipped; an unreadable workbook is fatal for the run.
    pub fn read_workbook(&self, path: &Path, year: &str) -> Result<Vec<CanonicalRecord>> {
        let mut workbook = open_workbook_auto(path)?;
        let normalizer = SheetNormalizer::new(self.schema);
        let mut records = Vec::new();

        for label in workbook.sheet_names().to_vec() {
            if label.to_lowercase().starts_with(NOTES_SHEET_PREFIX) {
                debug!(sheet = %label, "Skipping notes sheet");
                continue;
            }

            let range = workbook.worksheet_range(&label)?;
            let Some(sheet) = sheet_from_rows(&label, range.rows()) else {
                debug!(sheet = %label, "Skipping empty sheet");
                continue;
            };

            let rows = normalizer.normalize_sheet(&sheet, year);
            info!(year = %year, sheet = %label, rows = rows.len(), "Sheet normalized");
            records.extend(rows);
        }

        Ok(records)
    }
}

/// Builds a `RawSheet` from worksheet rows: the first row is the header row,
/// duplicate-named columns are dropped keeping the first occurrence, and
/// fully-blank rows are dropped. Returns `None` when no data rows survive.
fn sheet_from_rows<'r>(
    label: &str,
    mut rows: impl Iterator<Item = &'r [Data]>,
) -> Option<RawSheet> {
    let header_row = rows.next()?;

    let mut headers: Vec<String> = Vec::new();
    let mut keep: Vec<usize> = Vec::new();
    for (index, cell) in header_row.iter().enumerate() {
        let name = cell_text(cell).trim().to_string();
        if headers.contains(&name) {
            continue;
        }
        headers.push(name);
        keep.push(index);
    }

    let data_rows: Vec<Vec<String>> = rows
        .map(|row| {
            keep.iter()
                .map(|&index| row.get(index).map(cell_text).unwrap_or_default())
                .collect::<Vec<String>>()
        })
        .filter(|cells| cells.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    if data_rows.is_empty() {
        return None;
    }

    Some(RawSheet {
        label: label.to_string(),
        headers,
        rows: data_rows,
    })
}

/// Renders one spreadsheet cell as text. Dates, times and durations get the
/// fixed spellings the value coercers understand; error cells become empty.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::DateTime(value) => excel_datetime_text(value),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn excel_datetime_text(value: &ExcelDateTime) -> String {
    if value.is_datetime() {
        match value.as_datetime() {
            // Serials below 1.0 carry no date part, only a time of day
            Some(dt) if value.as_f64() < 1.0 => dt.format("%H:%M:%S").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        }
    } else {
        match value.as_duration() {
            Some(d) => format!(
                "{} days {:02}:{:02}:{:02}",
                d.num_days(),
                d.num_hours() % 24,
                d.num_minutes() % 60,
                d.num_seconds() % 60
            ),
            None => String::new(),
        }
    }
}
