#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub fn sqlc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sqlconnect");
    // keep the user's real ~/.sqlconnect out of the tests
    cmd.env("HOME", home);
    cmd
}

/// Create a small SQLite database with one table and one row
pub fn make_db(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let conn = rusqlite::Connection::open(&path).expect("create db");
    conn.execute_batch(
        "CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT NOT NULL);
         INSERT INTO notes (body) VALUES ('hello');",
    )
    .expect("seed db");
    drop(conn);
    path
}

/// Read the log file as a list of lines (without trailing newlines)
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read log")
        .lines()
        .map(str::to_string)
        .collect()
}
