use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the potential table inside a protein's pool directory.
pub const POTENTIALS_FILE_NAME: &str = "pkaS-potentials";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Protein identifier cannot be empty")]
    EmptyProtein,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub mom: PathBuf,
    pub potentials: PathBuf,
    pub samples: PathBuf,
}

impl InputPaths {
    /// Mom and potential paths for `protein` under the pool layout
    /// `{pool}/{protein}_2/{protein}.mom` and `{pool}/{protein}_2/pkaS-potentials`.
    pub fn pool_layout(pool_dir: &Path, protein: &str) -> (PathBuf, PathBuf) {
        let run_dir = pool_dir.join(format!("{}_2", protein));
        (
            run_dir.join(format!("{}.mom", protein)),
            run_dir.join(POTENTIALS_FILE_NAME),
        )
    }
}

/// Default summary table path for `protein`.
pub fn default_output_path(protein: &str) -> PathBuf {
    PathBuf::from(format!("{}_table.xlsx", protein))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabulationConfig {
    pub protein: String,
    pub inputs: InputPaths,
    pub output: PathBuf,
}

#[derive(Default)]
pub struct TabulationConfigBuilder {
    protein: Option<String>,
    mom_path: Option<PathBuf>,
    potentials_path: Option<PathBuf>,
    samples_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl TabulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protein(mut self, protein: impl Into<String>) -> Self {
        self.protein = Some(protein.into());
        self
    }
    pub fn mom_path(mut self, path: PathBuf) -> Self {
        self.mom_path = Some(path);
        self
    }
    pub fn potentials_path(mut self, path: PathBuf) -> Self {
        self.potentials_path = Some(path);
        self
    }
    pub fn samples_path(mut self, path: PathBuf) -> Self {
        self.samples_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    /// Builds the configuration. The output path falls back to `{protein}_table.xlsx`.
    pub fn build(self) -> Result<TabulationConfig, ConfigError> {
        let protein = self
            .protein
            .ok_or(ConfigError::MissingParameter("protein"))?;
        if protein.trim().is_empty() {
            return Err(ConfigError::EmptyProtein);
        }
        let inputs = InputPaths {
            mom: self
                .mom_path
                .ok_or(ConfigError::MissingParameter("mom_path"))?,
            potentials: self
                .potentials_path
                .ok_or(ConfigError::MissingParameter("potentials_path"))?,
            samples: self
                .samples_path
                .ok_or(ConfigError::MissingParameter("samples_path"))?,
        };
        let output = self
            .output_path
            .unwrap_or_else(|| default_output_path(&protein));
        Ok(TabulationConfig {
            protein,
            inputs,
            output,
        })
    }
}
