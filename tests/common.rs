#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ai() -> Command {
    cargo_bin_cmd!("articleimport")
}

/// CSV header matching the articles table (the tool discards it unread).
pub const CSV_HEADER: &str = "url,title,description,image_url,date,hacker_news_url";

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_articleimport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_test_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_articleimport.csv", name));
    let csv_path = path.to_string_lossy().to_string();
    fs::write(&csv_path, content).expect("write csv fixture");
    csv_path
}

/// Create the articles table (schema management is external to the tool,
/// so tests bootstrap it themselves)
pub fn create_articles_table(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE articles (
            id              TEXT PRIMARY KEY,
            url             TEXT,
            title           TEXT,
            description     TEXT,
            image_url       TEXT,
            date            TEXT,
            hacker_news_url TEXT
        );
        "#,
    )
    .expect("create articles table");
}

pub fn count_articles(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))
        .expect("count articles")
}

pub fn count_distinct_ids(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(DISTINCT id) FROM articles", [], |row| {
        row.get(0)
    })
    .expect("count distinct ids")
}

pub fn articles_table_exists(db_path: &str) -> bool {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='articles'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    count > 0
}
