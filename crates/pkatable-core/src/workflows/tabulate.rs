use crate::core::io::mom::MomFile;
use crate::core::io::potentials::{PotentialsFile, clean_potentials};
use crate::core::io::samples::SampleTable;
use crate::core::io::table::SummaryTable;
use crate::core::io::traits::RecordFile;
use crate::core::models::summary::JoinedRecord;
use crate::engine::config::TabulationConfig;
use crate::engine::error::EngineError;
use crate::engine::join::combine;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument, warn};

/// Counts gathered along the pipeline, alongside the joined rows.
#[derive(Debug, Clone)]
pub struct TabulationResult {
    pub rows: Vec<JoinedRecord>,
    pub residues_read: usize,
    pub potential_lines_read: usize,
    pub potentials_kept: usize,
    pub samples_read: usize,
}

impl TabulationResult {
    pub fn potentials_dropped(&self) -> usize {
        self.potential_lines_read - self.potentials_kept
    }
}

/// Builds the summary rows from the configured inputs without writing anything.
#[instrument(skip_all, name = "tabulation_workflow", fields(protein = %config.protein))]
pub fn build(
    config: &TabulationConfig,
    reporter: &ProgressReporter,
) -> Result<TabulationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Reading mom file",
    });
    info!("Reading residues from {:?}", &config.inputs.mom);
    let mom = MomFile::read_from_path(&config.inputs.mom)?;
    debug!("Read {} residue line(s).", mom.len());
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Reading potential table",
    });
    info!("Reading potentials from {:?}", &config.inputs.potentials);
    let raw_lines = PotentialsFile::read_from_path(&config.inputs.potentials)?;
    let potentials = clean_potentials(&raw_lines)?;
    debug!(
        "Kept {} of {} potential line(s); {} skipped by the width filter.",
        potentials.len(),
        raw_lines.len(),
        raw_lines.len() - potentials.len()
    );
    reporter.report(Progress::PhaseFinish);

    if mom.len() != potentials.len() {
        warn!(
            "Mom file has {} residue(s) but {} potential record(s) survived cleaning; \
             the positional join may pair mismatched residues.",
            mom.len(),
            potentials.len()
        );
    }

    reporter.report(Progress::PhaseStart {
        name: "Reading sample table",
    });
    info!("Reading samples from {:?}", &config.inputs.samples);
    let samples = SampleTable::read_from_path(&config.inputs.samples)?;
    debug!("Read {} sample row(s).", samples.len());
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Joining" });
    let rows = combine(&mom, &potentials, &samples)?;
    reporter.report(Progress::Message(format!("{} row(s) joined", rows.len())));
    reporter.report(Progress::PhaseFinish);

    Ok(TabulationResult {
        rows,
        residues_read: mom.len(),
        potential_lines_read: raw_lines.len(),
        potentials_kept: potentials.len(),
        samples_read: samples.len(),
    })
}

/// Runs the whole pipeline: read, clean, derive, join, then write `config.output`.
pub fn run(
    config: &TabulationConfig,
    reporter: &ProgressReporter,
) -> Result<TabulationResult, EngineError> {
    let result = build(config, reporter)?;

    reporter.report(Progress::PhaseStart {
        name: "Writing summary table",
    });
    info!(
        "Writing {} row(s) to {:?}",
        result.rows.len(),
        &config.output
    );
    SummaryTable::write_to_path(&result.rows, &config.output)?;
    reporter.report(Progress::PhaseFinish);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::potentials::RECORD_WIDTH;
    use crate::core::pka::shifted_pka;
    use crate::engine::config::TabulationConfigBuilder;
    use crate::engine::join::JoinSource;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn pad(content: &str) -> String {
        format!("{:<width$}", content, width = RECORD_WIDTH)
    }

    fn write_inputs(dir: &Path, samples_csv: &str) -> TabulationConfig {
        let mom_path = dir.join("1b57.mom");
        fs::write(
            &mom_path,
            "AAAresidue1 rest\nBBBresidue2 rest\nCCCresidue3 rest\n",
        )
        .unwrap();

        let pot_path = dir.join("pkaS-potentials");
        fs::write(
            &pot_path,
            format!(
                "{}\n{}\n{}\n",
                pad(" 1.0  2.0  3.0  4.0"),
                "0123456789",
                pad(" 5.0  -1.0  0.67  8.0")
            ),
        )
        .unwrap();

        let samples_path = dir.join("sample.csv");
        fs::write(&samples_path, samples_csv).unwrap();

        TabulationConfigBuilder::new()
            .protein("1b57")
            .mom_path(mom_path)
            .potentials_path(pot_path)
            .samples_path(samples_path)
            .output_path(dir.join("1b57_table.xlsx"))
            .build()
            .unwrap()
    }

    #[test]
    fn end_to_end_joins_surviving_potentials_in_order() {
        let dir = tempdir().unwrap();
        let config = write_inputs(dir.path(), "1,0.125\n2,0.666\n");

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.residues_read, 3);
        assert_eq!(result.potentials_kept, 2);
        assert_eq!(result.potentials_dropped(), 1);

        let first = &result.rows[0];
        assert_eq!(first.residue, "AAAresi");
        assert_eq!(first.e, 0.12);
        assert!((first.pka - (shifted_pka(1.0, 2.0, 3.0) * 10.0).round_ties_even() / 10.0).abs() < TOLERANCE);
        assert_eq!(first.charge, 2.0);

        let second = &result.rows[1];
        assert_eq!(second.residue, "BBBresi");
        assert_eq!(second.e, 0.67);
        assert!((second.pka - 5.5).abs() < TOLERANCE);
        assert_eq!(second.charge, -1.0);

        let written = SummaryTable::read_from_path(&config.output).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].same_values(first));
        assert!(written[1].same_values(second));
    }

    #[test]
    fn sample_beyond_surviving_potentials_is_out_of_range() {
        let dir = tempdir().unwrap();
        let config = write_inputs(dir.path(), "1,0.5\n3,0.5\n");

        let result = run(&config, &ProgressReporter::new());

        assert!(matches!(
            result,
            Err(EngineError::IndexOutOfRange {
                row: 2,
                numb: 3,
                source_name: JoinSource::Potentials,
                len: 2,
            })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_input_surfaces_as_mom_error() {
        let dir = tempdir().unwrap();
        let mut config = write_inputs(dir.path(), "1,0.5\n");
        config.inputs.mom = dir.path().join("absent.mom");

        let result = build(&config, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Mom { .. })));
    }

    #[test]
    fn build_reports_phases_through_callback() {
        use std::sync::{Arc, Mutex};

        let dir = tempdir().unwrap();
        let config = write_inputs(dir.path(), "1,0.5\n");
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = phases.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |p| {
            if let Progress::PhaseStart { name } = p {
                sink.lock().unwrap().push(name);
            }
        }));

        build(&config, &reporter).unwrap();

        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                "Reading mom file",
                "Reading potential table",
                "Reading sample table",
                "Joining"
            ]
        );
    }
}
