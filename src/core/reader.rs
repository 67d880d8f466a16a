//! CSV reading and row-to-article transformation.

use crate::errors::{AppError, AppResult};
use crate::models::article::{Article, CSV_FIELDS};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Read all data rows from the CSV at `path` and turn them into articles.
///
/// The first line is the header and is discarded without inspecting its
/// column names. Rows with fewer than 6 fields are rejected with the line
/// number; extra fields beyond the sixth are dropped (output is positional).
pub fn read_articles(path: &str) -> AppResult<Vec<Article>> {
    if !Path::new(path).is_file() {
        return Err(AppError::SourceNotFound(path.to_string()));
    }

    // Headerless reader so that discarding the header is an explicit step,
    // and flexible so that row shape is checked here, not by the csv crate.
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = rdr.records();

    // Skip the header row. A file with no rows at all is fine: zero articles.
    rows.next().transpose()?;

    let mut articles = Vec::new();
    for result in rows {
        let record = result?;
        articles.push(to_article(&record)?);
    }
    Ok(articles)
}

fn to_article(record: &StringRecord) -> AppResult<Article> {
    if record.len() < CSV_FIELDS {
        return Err(AppError::RowShape {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            expected: CSV_FIELDS,
            found: record.len(),
        });
    }

    Ok(Article::from_fields([
        &record[0], &record[1], &record[2], &record[3], &record[4], &record[5],
    ]))
}
