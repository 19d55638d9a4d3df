use crate::core::io::traits::RecordFile;
use crate::core::models::residue::MomRecord;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MomError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reader for mom files: one residue per line, identified by the first seven characters.
///
/// Lines are otherwise opaque. Blank lines carry no residue and are skipped, so record
/// indices count non-blank lines starting at 1.
pub struct MomFile;

impl RecordFile for MomFile {
    type Record = MomRecord;
    type Error = MomError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<MomRecord>, MomError> {
        let mut records = Vec::new();
        for line_res in reader.lines() {
            let line = line_res?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(MomRecord::new(records.len() + 1, line));
        }
        Ok(records)
    }
}
