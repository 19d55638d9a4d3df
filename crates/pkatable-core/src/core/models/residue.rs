/// Number of leading characters of a mom line that identify the residue.
pub const AMINO_WIDTH: usize = 7;

/// One line of a mom file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomRecord {
    /// 1-based position in read order.
    pub index: usize,
    /// The raw line, kept verbatim.
    pub combined: String,
    /// The residue identifier, i.e. the first [`AMINO_WIDTH`] characters of `combined`.
    pub amino: String,
}

impl MomRecord {
    pub fn new(index: usize, combined: impl Into<String>) -> Self {
        let combined = combined.into();
        let amino = amino_prefix(&combined).to_string();
        Self {
            index,
            combined,
            amino,
        }
    }
}

/// Returns the first [`AMINO_WIDTH`] characters of `line`, or all of it when shorter.
pub fn amino_prefix(line: &str) -> &str {
    match line.char_indices().nth(AMINO_WIDTH) {
        Some((byte_idx, _)) => &line[..byte_idx],
        None => line,
    }
}
