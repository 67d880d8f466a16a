use crate::cli::parser::Cli;
use crate::core::verify::VerifyLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli) -> AppResult<()> {
    if !cli.quiet {
        info(format!("Dry run: {} will not be touched", cli.db_file));
    }

    let count = VerifyLogic::run(&cli.csv_file)?;

    if !cli.quiet {
        success(format!(
            "CSV OK: {} article(s) would be imported",
            count
        ));
    }
    Ok(())
}
