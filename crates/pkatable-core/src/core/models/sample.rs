/// One row of the sample spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// 1-based residue index into the mom and potential sequences.
    pub numb: i64,
    /// Sampled energy.
    pub e: f64,
}
