use crate::core::reader::read_articles;
use crate::errors::AppResult;

pub struct VerifyLogic;

impl VerifyLogic {
    /// Dry run: read and validate the CSV exactly like an import would,
    /// without opening the destination database. Returns the number of
    /// articles that would be inserted.
    pub fn run(csv_path: &str) -> AppResult<usize> {
        let articles = read_articles(csv_path)?;
        Ok(articles.len())
    }
}
