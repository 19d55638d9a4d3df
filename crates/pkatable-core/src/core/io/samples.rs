use crate::core::io::cells::{cell_at, cell_number, cell_text, is_empty, row_span};
use crate::core::io::format::SpreadsheetFormat;
use crate::core::models::sample::SampleRecord;
use crate::core::utils::numeric::as_integral;
use calamine::{Reader, open_workbook_auto};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Workbook contains no worksheets")]
    NoWorksheet,
    #[error("Unsupported sample table format: '{0}' (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)")]
    UnsupportedFormat(String),
    #[error("Parse error on row {row}: {kind}")]
    Parse {
        row: usize,
        kind: SampleParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum SampleParseErrorKind {
    #[error("Missing value for column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("Residue index must be an integer (value: '{value}')")]
    NotAnIndex { value: String },
    #[error("Invalid float in column 'e' (value: '{value}')")]
    InvalidFloat { value: String },
}

/// Reader for the headerless two-column sample table (`numb`, `e`).
///
/// The first worksheet of a workbook, or a CSV file, is read in file order. Fully empty
/// rows are skipped; row numbers in errors are 1-based sheet rows.
pub struct SampleTable;

impl SampleTable {
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SampleRecord>, SampleError> {
        let path = path.as_ref();
        match SpreadsheetFormat::from_path(path) {
            Some(SpreadsheetFormat::Csv) => Self::read_csv(path),
            Some(format) if format.is_workbook() => Self::read_workbook(path),
            _ => Err(SampleError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn read_workbook(path: &Path) -> Result<Vec<SampleRecord>, SampleError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SampleError::NoWorksheet)??;

        let mut samples = Vec::new();
        for row in row_span(&range) {
            let numb_cell = cell_at(&range, row, 0);
            let e_cell = cell_at(&range, row, 1);
            if is_empty(numb_cell) && is_empty(e_cell) {
                continue;
            }
            samples.push(Self::parse_row(
                row as usize + 1,
                numb_cell.map(|_| cell_text(numb_cell)),
                cell_number(numb_cell),
                e_cell.map(|_| cell_text(e_cell)),
                cell_number(e_cell),
            )?);
        }
        Ok(samples)
    }

    fn read_csv(path: &Path) -> Result<Vec<SampleRecord>, SampleError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut samples = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            // The reader skips blank lines, so only the record position matches the file.
            let row = record
                .position()
                .and_then(|pos| usize::try_from(pos.line()).ok())
                .unwrap_or(row_idx + 1);
            let numb_text = record.get(0).map(str::to_string);
            let e_text = record.get(1).map(str::to_string);
            let numb_value = numb_text.as_deref().and_then(|s| s.parse().ok());
            let e_value = e_text.as_deref().and_then(|s| s.parse().ok());
            samples.push(Self::parse_row(
                row,
                numb_text,
                numb_value,
                e_text,
                e_value,
            )?);
        }
        Ok(samples)
    }

    fn parse_row(
        row: usize,
        numb_text: Option<String>,
        numb_value: Option<f64>,
        e_text: Option<String>,
        e_value: Option<f64>,
    ) -> Result<SampleRecord, SampleError> {
        let parse_err = |kind| SampleError::Parse { row, kind };

        let numb_text = numb_text
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| parse_err(SampleParseErrorKind::MissingColumn { column: "numb" }))?;
        let numb = numb_value
            .and_then(as_integral)
            .ok_or_else(|| parse_err(SampleParseErrorKind::NotAnIndex { value: numb_text }))?;

        let e_text = e_text
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| parse_err(SampleParseErrorKind::MissingColumn { column: "e" }))?;
        let e = e_value
            .ok_or_else(|| parse_err(SampleParseErrorKind::InvalidFloat { value: e_text }))?;

        Ok(SampleRecord { numb, e })
    }
}
