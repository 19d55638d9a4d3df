mod defaults;

pub use defaults::DefaultsConfig;

use crate::cli::TabulateArgs;
use crate::error::{CliError, Result};
use directories::BaseDirs;
use pkatable::engine::config::{self as core_config, InputPaths};
use pkatable::engine::error::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPathsConfig {
    #[serde(rename = "pool-dir")]
    pool_dir: Option<String>,
    mom: Option<String>,
    potentials: Option<String>,
    samples: Option<String>,
    output: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialTabulationConfig {
    protein: Option<String>,
    paths: Option<PartialPathsConfig>,
}

impl PartialTabulationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|_| CliError::MissingInput {
            role: "config file",
            path: path.to_path_buf(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final configuration. Precedence: dedicated CLI flag, then `--set`,
    /// then the config file, then [`DefaultsConfig`].
    pub fn merge_with_cli(
        mut self,
        args: &TabulateArgs,
        defaults: &DefaultsConfig,
    ) -> Result<core_config::TabulationConfig> {
        self.apply_set_values(&args.set_values)?;
        let paths = self.paths.take().unwrap_or_default();

        let protein = args
            .protein
            .clone()
            .or(self.protein)
            .unwrap_or_else(|| defaults.protein.clone());

        let pool_dir = match &args.pool_dir {
            Some(dir) => dir.clone(),
            None => expand_home(paths.pool_dir.as_deref().unwrap_or(&defaults.pool_dir))?,
        };
        let (layout_mom, layout_potentials) = InputPaths::pool_layout(&pool_dir, &protein);

        let pick = |cli: &Option<PathBuf>, file: &Option<String>| -> Result<Option<PathBuf>> {
            match (cli, file) {
                (Some(path), _) => Ok(Some(path.clone())),
                (None, Some(raw)) => expand_home(raw).map(Some),
                (None, None) => Ok(None),
            }
        };

        let mom = pick(&args.mom, &paths.mom)?.unwrap_or(layout_mom);
        let potentials = pick(&args.potentials, &paths.potentials)?.unwrap_or(layout_potentials);
        let samples = match pick(&args.samples, &paths.samples)? {
            Some(path) => path,
            None => expand_home(&defaults.samples)?,
        };

        let mut builder = core_config::TabulationConfigBuilder::new()
            .protein(protein)
            .mom_path(mom)
            .potentials_path(potentials)
            .samples_path(samples);
        if let Some(output) = pick(&args.output, &paths.output)? {
            builder = builder.output_path(output);
        }

        Ok(builder.build().map_err(EngineError::from)?)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Argument(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value = Some(value.to_string());

            match key {
                "protein" => self.protein = value,
                "paths.pool-dir" => self.paths_mut().pool_dir = value,
                "paths.mom" => self.paths_mut().mom = value,
                "paths.potentials" => self.paths_mut().potentials = value,
                "paths.samples" => self.paths_mut().samples = value,
                "paths.output" => self.paths_mut().output = value,
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn paths_mut(&mut self) -> &mut PartialPathsConfig {
        self.paths.get_or_insert_with(Default::default)
    }
}

/// Expands a leading `~` to the current user's home directory.
fn expand_home(raw: &str) -> Result<PathBuf> {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return Ok(PathBuf::from(raw)),
    };
    let base = BaseDirs::new().ok_or_else(|| {
        CliError::Config(format!(
            "Cannot expand '{}': the home directory could not be determined.",
            raw
        ))
    })?;
    Ok(base
        .home_dir()
        .join(rest.trim_start_matches(['/', '\\'])))
}
