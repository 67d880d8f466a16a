use clap::Parser;

/// Command-line interface definition for articleimport
/// CLI utility to bulk-import article records from CSV into SQLite
#[derive(Parser)]
#[command(
    name = "articleimport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bulk-import article records from a CSV file into a SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Path to the source CSV file (first line is a header and is discarded)
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: String,

    /// Path to the destination SQLite database (must already contain the articles table)
    #[arg(value_name = "DB_FILE")]
    pub db_file: String,

    /// Parse and validate the CSV without writing to the database
    #[arg(long = "dry-run", help = "Parse and validate only, insert nothing")]
    pub dry_run: bool,

    /// Suppress informational output (errors are still printed)
    #[arg(long = "quiet", short = 'q')]
    pub quiet: bool,
}
