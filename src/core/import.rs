use crate::core::reader::read_articles;
use crate::db::insert::insert_articles;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub struct ImportLogic;

impl ImportLogic {
    /// Run the whole pipeline: read and transform the CSV, then bulk-insert
    /// into the destination database. Returns the number of inserted rows.
    ///
    /// The CSV is read completely before the database is opened, so a bad
    /// source file never touches the destination.
    pub fn run(csv_path: &str, db_path: &str) -> AppResult<usize> {
        let articles = read_articles(csv_path)?;

        let mut pool = DbPool::new(db_path)?;
        insert_articles(&mut pool, &articles)
    }
}
