/// Energy of one pKa unit at room temperature, in kcal/mol.
pub const KCAL_PER_PKA_UNIT: f64 = 1.34;

/// Shifted pKa of a residue: `a - b * c / 1.34`.
///
/// `a` is the reference pKa column, `b` the charge and `c` the potential. Plain IEEE
/// arithmetic; a NaN in any input yields NaN.
#[inline]
pub fn shifted_pka(a: f64, b: f64, c: f64) -> f64 {
    a - b * c / KCAL_PER_PKA_UNIT
}
