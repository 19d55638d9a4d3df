use crate::cli::TabulateArgs;
use crate::config::{DefaultsConfig, PartialTabulationConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::render::render_table;
use pkatable::engine::config::TabulationConfig;
use pkatable::engine::progress::ProgressReporter;
use pkatable::workflows;
use tracing::info;

pub fn run(args: TabulateArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialTabulationConfig::from_file(path)?,
        None => PartialTabulationConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args, &DefaultsConfig::default())?;

    ensure_inputs_exist(&config)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the tabulation workflow for protein '{}'.", config.protein);
    let result = workflows::tabulate::run(&config, &reporter)?;

    println!("{}", render_table(&result.rows));
    println!(
        "✓ {} row(s) written to: {}",
        result.rows.len(),
        config.output.display()
    );

    Ok(())
}

fn ensure_inputs_exist(config: &TabulationConfig) -> Result<()> {
    let inputs = [
        ("mom file", &config.inputs.mom),
        ("potential file", &config.inputs.potentials),
        ("sample table", &config.inputs.samples),
    ];
    for (role, path) in inputs {
        if !path.is_file() {
            return Err(CliError::MissingInput {
                role,
                path: path.clone(),
            });
        }
    }
    Ok(())
}
