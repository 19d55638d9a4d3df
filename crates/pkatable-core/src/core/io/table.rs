use crate::core::io::cells::{cell_at, cell_number, cell_text, is_empty, row_span};
use crate::core::io::format::SpreadsheetFormat;
use crate::core::models::summary::JoinedRecord;
use calamine::{Reader, open_workbook_auto};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Column headers after the leading, unnamed row-index column.
pub const COLUMNS: [&str; 4] = ["residue", "e", "pka", "charge"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Spreadsheet write error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Workbook contains no worksheets")]
    NoWorksheet,
    #[error("Unsupported summary table format: '{0}' (expected .xlsx or .csv)")]
    UnsupportedFormat(String),
    #[error("Unexpected header row: expected {expected:?}, found {found:?}")]
    Header {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("Invalid float in column '{column}' on row {row} (value: '{value}')")]
    InvalidFloat {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Reader and writer for the summary table.
///
/// Layout: a header row (blank cell, then [`COLUMNS`]), followed by one row per record whose
/// first cell is the 0-based row index. NaN is stored as an empty cell and read back as NaN;
/// infinities are stored as the text `inf` or `-inf`.
pub struct SummaryTable;

impl SummaryTable {
    pub fn write_to_path<P: AsRef<Path>>(rows: &[JoinedRecord], path: P) -> Result<(), TableError> {
        let path = path.as_ref();
        match SpreadsheetFormat::from_path(path) {
            Some(SpreadsheetFormat::Xlsx) => Self::write_xlsx(rows, path),
            Some(SpreadsheetFormat::Csv) => Self::write_csv(rows, path),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JoinedRecord>, TableError> {
        let path = path.as_ref();
        match SpreadsheetFormat::from_path(path) {
            Some(SpreadsheetFormat::Csv) => Self::read_csv(path),
            Some(format) if format.is_workbook() => Self::read_workbook(path),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn write_xlsx(rows: &[JoinedRecord], path: &Path) -> Result<(), TableError> {
        let header_format = Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16 + 1, *name, &header_format)?;
        }

        for (i, record) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_number_with_format(row, 0, i as f64, &header_format)?;
            if !record.residue.is_empty() {
                sheet.write_string(row, 1, &record.residue)?;
            }
            for (col, value) in [(2u16, record.e), (3, record.pka), (4, record.charge)] {
                if value.is_finite() {
                    sheet.write_number(row, col, value)?;
                } else if value.is_infinite() {
                    sheet.write_string(row, col, format_number(value))?;
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }

    fn write_csv(rows: &[JoinedRecord], path: &Path) -> Result<(), TableError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(std::iter::once("").chain(COLUMNS))?;
        for (i, record) in rows.iter().enumerate() {
            writer.write_record([
                i.to_string(),
                record.residue.clone(),
                format_number(record.e),
                format_number(record.pka),
                format_number(record.charge),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_workbook(path: &Path) -> Result<Vec<JoinedRecord>, TableError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableError::NoWorksheet)??;

        let mut span = row_span(&range);
        let Some(header_row) = span.next() else {
            return Ok(Vec::new());
        };
        let header: Vec<String> = (1..=COLUMNS.len() as u32)
            .map(|col| cell_text(cell_at(&range, header_row, col)))
            .collect();
        check_header(&header)?;

        let mut rows = Vec::new();
        for row in span {
            if (0..=COLUMNS.len() as u32).all(|col| is_empty(cell_at(&range, row, col))) {
                continue;
            }
            let number = |col: u32, column: &'static str| -> Result<f64, TableError> {
                let cell = cell_at(&range, row, col);
                if is_empty(cell) {
                    return Ok(f64::NAN);
                }
                cell_number(cell).ok_or_else(|| TableError::InvalidFloat {
                    row: row as usize + 1,
                    column,
                    value: cell_text(cell),
                })
            };
            rows.push(JoinedRecord {
                residue: cell_text(cell_at(&range, row, 1)),
                e: number(2, "e")?,
                pka: number(3, "pka")?,
                charge: number(4, "charge")?,
            });
        }
        Ok(rows)
    }

    fn read_csv(path: &Path) -> Result<Vec<JoinedRecord>, TableError> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let header: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();
        check_header(&header)?;

        let mut rows = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let row = i + 2;
            let number = |idx: usize, column: &'static str| -> Result<f64, TableError> {
                let text = record.get(idx).unwrap_or("").trim();
                if text.is_empty() {
                    return Ok(f64::NAN);
                }
                text.parse().map_err(|_| TableError::InvalidFloat {
                    row,
                    column,
                    value: text.to_string(),
                })
            };
            rows.push(JoinedRecord {
                residue: record.get(1).unwrap_or("").to_string(),
                e: number(2, "e")?,
                pka: number(3, "pka")?,
                charge: number(4, "charge")?,
            });
        }
        Ok(rows)
    }
}

fn check_header(found: &[String]) -> Result<(), TableError> {
    if found.len() >= COLUMNS.len() && found.iter().zip(COLUMNS).all(|(f, c)| f == c) {
        return Ok(());
    }
    Err(TableError::Header {
        expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
        found: found.to_vec(),
    })
}

/// Shortest round-trip representation; NaN becomes an empty field, infinities `inf`/`-inf`.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{:?}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<JoinedRecord> {
        vec![
            JoinedRecord {
                residue: "ASP A  ".to_string(),
                e: 0.12,
                pka: 3.1,
                charge: -1.0,
            },
            JoinedRecord {
                residue: "LYS B  ".to_string(),
                e: -2.67,
                pka: 10.4,
                charge: 0.75,
            },
        ]
    }

    fn assert_rows_match(actual: &[JoinedRecord], expected: &[JoinedRecord]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.same_values(e), "{:?} != {:?}", a, e);
        }
    }

    #[test]
    fn xlsx_written_table_reads_back_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1b57_table.xlsx");
        let rows = sample_rows();

        SummaryTable::write_to_path(&rows, &path).unwrap();
        let read_back = SummaryTable::read_from_path(&path).unwrap();

        assert_rows_match(&read_back, &rows);
    }

    #[test]
    fn csv_written_table_reads_back_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1b57_table.csv");
        let rows = sample_rows();

        SummaryTable::write_to_path(&rows, &path).unwrap();
        let read_back = SummaryTable::read_from_path(&path).unwrap();

        assert_rows_match(&read_back, &rows);
    }

    #[test]
    fn csv_layout_has_blank_index_header_and_row_indices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");

        SummaryTable::write_to_path(&sample_rows(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], ",residue,e,pka,charge");
        assert_eq!(lines[1], "0,ASP A  ,0.12,3.1,-1.0");
        assert_eq!(lines[2], "1,LYS B  ,-2.67,10.4,0.75");
    }

    #[test]
    fn nan_values_survive_as_empty_cells() {
        let dir = tempdir().unwrap();
        let rows = vec![JoinedRecord {
            residue: "GLU A  ".to_string(),
            e: 1.5,
            pka: f64::NAN,
            charge: f64::NAN,
        }];

        for name in ["nan.xlsx", "nan.csv"] {
            let path = dir.path().join(name);
            SummaryTable::write_to_path(&rows, &path).unwrap();
            let read_back = SummaryTable::read_from_path(&path).unwrap();
            assert_rows_match(&read_back, &rows);
        }
    }

    #[test]
    fn infinite_values_are_kept_as_text() {
        let dir = tempdir().unwrap();
        let rows = vec![JoinedRecord {
            residue: "CYS A  ".to_string(),
            e: 0.5,
            pka: f64::NEG_INFINITY,
            charge: f64::INFINITY,
        }];

        for name in ["inf.xlsx", "inf.csv"] {
            let path = dir.path().join(name);
            SummaryTable::write_to_path(&rows, &path).unwrap();
            let read_back = SummaryTable::read_from_path(&path).unwrap();
            assert_eq!(read_back[0].pka, f64::NEG_INFINITY, "{}", name);
            assert_eq!(read_back[0].charge, f64::INFINITY, "{}", name);
        }

        let content = fs::read_to_string(dir.path().join("inf.csv")).unwrap();
        assert_eq!(content.lines().nth(1), Some("0,CYS A  ,0.5,-inf,inf"));
    }

    #[test]
    fn empty_table_round_trips() {
        let dir = tempdir().unwrap();
        for name in ["empty.xlsx", "empty.csv"] {
            let path = dir.path().join(name);
            SummaryTable::write_to_path(&[], &path).unwrap();
            assert!(SummaryTable::read_from_path(&path).unwrap().is_empty());
        }
    }

    #[test]
    fn unsupported_output_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let result = SummaryTable::write_to_path(&sample_rows(), dir.path().join("table.xls"));
        assert!(matches!(result, Err(TableError::UnsupportedFormat(_))));
    }

    #[test]
    fn foreign_csv_header_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.csv");
        fs::write(&path, ",name,value\n0,x,1\n").unwrap();

        let result = SummaryTable::read_from_path(&path);
        assert!(matches!(result, Err(TableError::Header { .. })));
    }
}
