use crate::core::models::potential::PotentialRecord;
use crate::core::models::residue::MomRecord;
use crate::core::models::sample::SampleRecord;
use crate::core::models::summary::JoinedRecord;
use crate::core::utils::numeric::round_half_even;
use crate::engine::error::EngineError;
use std::fmt;

/// Decimal places kept for the sampled energy.
pub const ENERGY_DECIMALS: i32 = 2;
/// Decimal places kept for the shifted pKa.
pub const PKA_DECIMALS: i32 = 1;

/// The sequence a sample index is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSource {
    Mom,
    Potentials,
}

impl fmt::Display for JoinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSource::Mom => write!(f, "mom"),
            JoinSource::Potentials => write!(f, "potentials"),
        }
    }
}

/// Assembles one summary row per sample, in sample order.
///
/// A sample with `numb = n` reads `mom[n - 1]` and `potentials[n - 1]`: the join is purely
/// positional and trusts that both sequences enumerate residues in the same order.
///
/// # Errors
///
/// Returns [`EngineError::IndexOutOfRange`] for the first sample whose index is below 1 or
/// beyond the end of either sequence.
pub fn combine(
    mom: &[MomRecord],
    potentials: &[PotentialRecord],
    samples: &[SampleRecord],
) -> Result<Vec<JoinedRecord>, EngineError> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let residue = lookup(mom, sample.numb, i + 1, JoinSource::Mom)?;
            let potential = lookup(potentials, sample.numb, i + 1, JoinSource::Potentials)?;
            Ok(JoinedRecord {
                residue: residue.amino.clone(),
                e: round_half_even(sample.e, ENERGY_DECIMALS),
                pka: round_half_even(potential.pka, PKA_DECIMALS),
                charge: potential.b,
            })
        })
        .collect()
}

fn lookup<T>(records: &[T], numb: i64, row: usize, source: JoinSource) -> Result<&T, EngineError> {
    usize::try_from(numb)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| records.get(idx))
        .ok_or(EngineError::IndexOutOfRange {
            row,
            numb,
            source_name: source,
            len: records.len(),
        })
}
