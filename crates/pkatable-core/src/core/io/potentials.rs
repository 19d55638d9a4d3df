use crate::core::io::traits::RecordFile;
use crate::core::models::potential::{PotentialRecord, RawPotentialLine};
use crate::core::pka::shifted_pka;
use std::io::{self, BufRead};
use thiserror::Error;

/// Exact character width of a data line in a potential file.
pub const RECORD_WIDTH: usize = 29;

/// Number of numeric columns on a data line.
pub const FIELD_COUNT: usize = 4;

const COLUMN_NAMES: [char; FIELD_COUNT] = ['a', 'b', 'c', 'd'];

#[derive(Debug, Error)]
pub enum PotentialError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PotentialParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum PotentialParseErrorKind {
    #[error("Expected 4 whitespace-separated fields, found {found} (line: '{content}')")]
    FieldCount { found: usize, content: String },
    #[error("Invalid float in column '{column}' (value: '{value}')")]
    InvalidFloat { column: char, value: String },
}

/// Reader for potential files. Yields every non-blank line verbatim, tagged with its
/// line number; column splitting happens in [`clean_potentials`].
pub struct PotentialsFile;

impl RecordFile for PotentialsFile {
    type Record = RawPotentialLine;
    type Error = PotentialError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<RawPotentialLine>, PotentialError> {
        let mut lines = Vec::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let content = line_res?;
            if content.trim().is_empty() {
                continue;
            }
            lines.push(RawPotentialLine {
                line: line_num + 1,
                content,
            });
        }
        Ok(lines)
    }
}

/// Whether a raw line has the fixed width of a data line.
///
/// Headers, separators and any line with different spacing fail this test.
pub fn is_record_line(content: &str) -> bool {
    content.chars().count() == RECORD_WIDTH
}

/// Keeps the data lines of a potential file, splits them into columns and derives the pKa.
///
/// Lines that are not exactly [`RECORD_WIDTH`] characters long are dropped without error.
/// The surviving records are re-indexed by survival order, so their positions no longer
/// match source line numbers.
///
/// # Errors
///
/// Returns [`PotentialError::Parse`] when a line of the right width does not hold exactly
/// four numeric fields.
pub fn clean_potentials(lines: &[RawPotentialLine]) -> Result<Vec<PotentialRecord>, PotentialError> {
    lines
        .iter()
        .filter(|raw| is_record_line(&raw.content))
        .map(parse_record)
        .collect()
}

fn parse_record(raw: &RawPotentialLine) -> Result<PotentialRecord, PotentialError> {
    let fields: Vec<&str> = raw.content.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(PotentialError::Parse {
            line: raw.line,
            kind: PotentialParseErrorKind::FieldCount {
                found: fields.len(),
                content: raw.content.clone(),
            },
        });
    }

    let mut values = [0.0; FIELD_COUNT];
    for ((value, field), column) in values.iter_mut().zip(&fields).zip(COLUMN_NAMES) {
        *value = field.parse().map_err(|_| PotentialError::Parse {
            line: raw.line,
            kind: PotentialParseErrorKind::InvalidFloat {
                column,
                value: field.to_string(),
            },
        })?;
    }
    let [a, b, c, d] = values;

    Ok(PotentialRecord {
        line: raw.line,
        a,
        b,
        c,
        d,
        pka: shifted_pka(a, b, c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TOLERANCE: f64 = 1e-9;

    fn raw(line: usize, content: &str) -> RawPotentialLine {
        RawPotentialLine {
            line,
            content: content.to_string(),
        }
    }

    fn pad(content: &str) -> String {
        format!("{:<width$}", content, width = RECORD_WIDTH)
    }

    #[test]
    fn read_keeps_lines_verbatim_with_line_numbers() {
        let content = format!("header\n\n{}\n", pad("  3.90  -1.00  0.50  2.0"));
        let lines = PotentialsFile::read_from(&mut Cursor::new(content)).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], raw(1, "header"));
        assert_eq!(lines[1].line, 3);
        assert_eq!(lines[1].content.chars().count(), RECORD_WIDTH);
    }

    #[test]
    fn record_width_check_is_exact() {
        assert!(is_record_line(&pad("1 2 3 4")));
        assert!(!is_record_line(&format!("{} ", pad("1 2 3 4"))));
        assert!(!is_record_line("1 2 3 4"));
    }

    #[test]
    fn clean_splits_valid_lines_into_four_fields_and_derives_pka() {
        let lines = vec![raw(1, &pad(" 4.00  1.00  2.68  0.10")), raw(2, &pad("  3.90  -1.00  1.34E+00  7"))];
        let records = clean_potentials(&lines).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            (records[0].a, records[0].b, records[0].c, records[0].d),
            (4.0, 1.0, 2.68, 0.1)
        );
        assert!((records[0].pka - 2.0).abs() < TOLERANCE);
        assert!((records[1].pka - 4.9).abs() < TOLERANCE);
        for r in &records {
            assert!((r.pka - (r.a - r.b * r.c / 1.34)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn lines_of_other_lengths_are_dropped_and_survivors_reindexed() {
        let lines = vec![
            raw(1, "pKa potentials"),
            raw(2, &pad(" 1.0  2.0  3.0  4.0")),
            raw(3, "too short"),
            raw(4, &format!("{}   ", pad(" 9.0  9.0  9.0  9.0"))),
            raw(5, &pad(" 5.0  6.0  7.0  8.0")),
        ];
        let records = clean_potentials(&lines).unwrap();

        assert_eq!(records.len(), lines.len() - 3);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].line, 5);
        assert_eq!(records[1].a, 5.0);
    }

    #[test]
    fn wrong_field_count_is_a_parse_error_naming_the_line() {
        let lines = vec![raw(7, &pad(" 1.0  2.0  3.0"))];
        let result = clean_potentials(&lines);

        assert!(matches!(
            result,
            Err(PotentialError::Parse {
                line: 7,
                kind: PotentialParseErrorKind::FieldCount { found: 3, .. }
            })
        ));
    }

    #[test]
    fn non_numeric_field_is_a_parse_error_naming_the_column() {
        let lines = vec![raw(3, &pad(" 1.0  abc  3.0  4.0"))];
        let result = clean_potentials(&lines);

        match result {
            Err(PotentialError::Parse { line, kind }) => {
                assert_eq!(line, 3);
                assert_eq!(
                    kind,
                    PotentialParseErrorKind::InvalidFloat {
                        column: 'b',
                        value: "abc".to_string()
                    }
                );
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn nan_fields_propagate_into_pka() {
        let lines = vec![raw(1, &pad(" NaN  1.0  1.0  1.0"))];
        let records = clean_potentials(&lines).unwrap();
        assert!(records[0].pka.is_nan());
    }
}
