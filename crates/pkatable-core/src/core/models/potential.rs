/// A raw line of a potential file before any column splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPotentialLine {
    /// 1-based line number in the source file.
    pub line: usize,
    pub content: String,
}

/// A cleaned potential row with its derived pKa.
///
/// `a`, `b`, `c` and `d` are the four whitespace-separated columns of the source line;
/// `b` doubles as the residue charge in the summary table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialRecord {
    /// 1-based source line number; diagnostics only, never used for joining.
    pub line: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub pka: f64,
}
