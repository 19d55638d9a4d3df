use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pkatable",
    version,
    about = "pkatable - Builds per-residue pKa summary tables from mom files, potential tables and sampled residue energies.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join the mom file, potential table and sample table into a summary table.
    Tabulate(TabulateArgs),
    /// Print a previously written summary table.
    Show(ShowArgs),
}

/// Arguments for the `tabulate` subcommand.
#[derive(Args, Debug)]
pub struct TabulateArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Protein identifier (e.g., '1b57'); selects the input and output file names.
    #[arg(short, long, value_name = "ID")]
    pub protein: Option<String>,

    /// Directory holding the '{protein}_2' run directories.
    #[arg(long, value_name = "DIR")]
    pub pool_dir: Option<PathBuf>,

    /// Override the mom file path.
    #[arg(long, value_name = "PATH")]
    pub mom: Option<PathBuf>,

    /// Override the potential table path.
    #[arg(long, value_name = "PATH")]
    pub potentials: Option<PathBuf>,

    /// Override the sample table path (.xlsx, .xls, .ods or .csv).
    #[arg(short, long, value_name = "PATH")]
    pub samples: Option<PathBuf>,

    /// Path for the summary table (.xlsx or .csv). Defaults to '{protein}_table.xlsx'.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S paths.pool-dir=/data/POOL
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to a summary table written by 'tabulate'.
    #[arg(required = true, value_name = "PATH")]
    pub table: PathBuf,
}
