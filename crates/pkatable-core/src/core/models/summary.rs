/// One row of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub residue: String,
    /// Energy rounded to two decimals.
    pub e: f64,
    /// Shifted pKa rounded to one decimal.
    pub pka: f64,
    /// Unrounded charge column of the potential record.
    pub charge: f64,
}

impl JoinedRecord {
    /// Compares two rows, treating NaN fields as equal to each other.
    pub fn same_values(&self, other: &Self) -> bool {
        fn eq(x: f64, y: f64) -> bool {
            (x.is_nan() && y.is_nan()) || x == y
        }
        self.residue == other.residue
            && eq(self.e, other.e)
            && eq(self.pka, other.pka)
            && eq(self.charge, other.charge)
    }
}
