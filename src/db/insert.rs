//! Bulk insert into the pre-existing `articles` table.
//! Schema management is external: the table is probed, never created.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::article::Article;
use rusqlite::{Connection, OptionalExtension, Result, params};

pub const ARTICLES_TABLE: &str = "articles";

/// Check whether a table exists in the connected database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Insert all articles in one transaction and commit.
///
/// All-or-nothing: any failing row rolls back the whole batch. Returns the
/// number of inserted rows.
pub fn insert_articles(pool: &mut DbPool, articles: &[Article]) -> AppResult<usize> {
    if !table_exists(&pool.conn, ARTICLES_TABLE)? {
        return Err(AppError::MissingTable(ARTICLES_TABLE.to_string()));
    }

    let tx = pool.conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO articles (id, url, title, description, image_url, date, hacker_news_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )?;

        for article in articles {
            stmt.execute(params![
                article.id,
                article.url,
                article.title,
                article.description,
                article.image_url,
                article.date,
                article.hacker_news_url,
            ])?;
        }
    }
    tx.commit()?;

    Ok(articles.len())
}
