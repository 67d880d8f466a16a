use crate::cli::parser::Cli;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let inserted = ImportLogic::run(&cli.csv_file, &cli.db_file)?;

    if !cli.quiet {
        if inserted == 0 {
            warning(format!("No data rows found in {}", cli.csv_file));
        }
        success(format!(
            "Imported {} article(s) into {}",
            inserted, cli.db_file
        ));
    }
    Ok(())
}
