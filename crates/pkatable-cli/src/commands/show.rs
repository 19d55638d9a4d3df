use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::utils::render::render_table;
use pkatable::core::io::table::SummaryTable;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    if !args.table.is_file() {
        return Err(CliError::MissingInput {
            role: "summary table",
            path: args.table,
        });
    }

    info!("Reading summary table from {:?}", &args.table);
    let rows = SummaryTable::read_from_path(&args.table).map_err(|e| CliError::FileParsing {
        path: args.table.clone(),
        source: e.into(),
    })?;

    println!("{}", render_table(&rows));
    Ok(())
}
