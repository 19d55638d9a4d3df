use thiserror::Error;

use super::config::ConfigError;
use super::join::JoinSource;
use crate::core::io::mom::MomError;
use crate::core::io::potentials::PotentialError;
use crate::core::io::samples::SampleError;
use crate::core::io::table::TableError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read mom file: {source}")]
    Mom {
        #[from]
        source: MomError,
    },

    #[error("Failed to read potential file: {source}")]
    Potentials {
        #[from]
        source: PotentialError,
    },

    #[error("Failed to read sample table: {source}")]
    Samples {
        #[from]
        source: SampleError,
    },

    #[error("Failed to write summary table: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error(
        "Sample row {row} references residue {numb}, but the {source_name} sequence has {len} record(s)"
    )]
    IndexOutOfRange {
        row: usize,
        numb: i64,
        source_name: JoinSource,
        len: usize,
    },
}
