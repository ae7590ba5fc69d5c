use predicates::str::contains;
use std::fs;

mod common;
use common::{make_db, read_lines, sqlc};

#[test]
fn test_connect_success() {
    let home = tempfile::tempdir().unwrap();
    let db = make_db(home.path(), "db.db");
    let log = home.path().join("cli.log");

    sqlc(home.path())
        .args(["--log", log.to_str().unwrap(), "connect", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Connected to"))
        .stdout(contains("cli.log"));

    let lines = read_lines(&log);
    assert_eq!(lines[3], "INFO:connect:Successfully connected with db.db");
    assert_eq!(lines[4], "INFO:connect:FINISHED");
}

#[test]
fn test_connect_missing_db_fails() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("missing.db");
    let log = home.path().join("cli.log");

    sqlc(home.path())
        .args(["connect", db.to_str().unwrap(), "--log", log.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("database not found"));

    let lines = read_lines(&log);
    assert_eq!(lines[2], "ERROR:connect:DatabaseNotFoundError");
    assert_eq!(lines[3], "INFO:connect:FINISHED");
}

#[test]
fn test_connect_unwritable_log_fails() {
    let home = tempfile::tempdir().unwrap();
    let db = make_db(home.path(), "db.db");
    let log = home.path().join("nope").join("cli.log");

    sqlc(home.path())
        .args(["--log", log.to_str().unwrap(), "connect", db.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("cannot open log destination"));
}

#[test]
fn test_config_init_then_connect_uses_default_log() {
    let home = tempfile::tempdir().unwrap();
    let db = make_db(home.path(), "db.db");

    sqlc(home.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));

    sqlc(home.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    sqlc(home.path())
        .args(["connect", db.to_str().unwrap()])
        .assert()
        .success();

    let log = home.path().join(".sqlconnect").join("sqlconnect.log");
    assert_eq!(read_lines(&log).len(), 5);
}

#[test]
fn test_config_print_shows_defaults() {
    let home = tempfile::tempdir().unwrap();

    sqlc(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("logger_name: connect"))
        .stdout(contains("timestamps: false"));
}

#[test]
fn test_config_file_options_reach_the_log() {
    let home = tempfile::tempdir().unwrap();
    let db = make_db(home.path(), "db.db");
    let log = home.path().join("app.log");

    let conf_dir = home.path().join(".sqlconnect");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("sqlconnect.conf"),
        format!(
            "log_file: {}\nlogger_name: app\ntimestamps: true\n",
            log.display()
        ),
    )
    .unwrap();

    sqlc(home.path())
        .args(["connect", db.to_str().unwrap()])
        .assert()
        .success();

    let lines = read_lines(&log);
    assert_eq!(lines.len(), 5);
    assert!(lines[4].ends_with(" INFO:app:FINISHED"));
}

#[test]
fn test_malformed_config_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let conf_dir = home.path().join(".sqlconnect");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("sqlconnect.conf"), "timestamps: [1, 2]\n").unwrap();

    sqlc(home.path())
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_read_only_flag() {
    let home = tempfile::tempdir().unwrap();
    let db = make_db(home.path(), "db.db");
    let log = home.path().join("cli.log");

    sqlc(home.path())
        .args([
            "--log",
            log.to_str().unwrap(),
            "connect",
            "--read-only",
            db.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn test_relative_paths_resolve_against_working_directory() {
    let home = tempfile::tempdir().unwrap();
    make_db(home.path(), "db.db");
    // the child's cwd is reported without symlinks
    let cwd = home.path().canonicalize().unwrap();

    sqlc(home.path())
        .current_dir(home.path())
        .args(["connect", "./db.db", "--log", "./app.log"])
        .assert()
        .success();

    let lines = read_lines(&cwd.join("app.log"));
    assert_eq!(lines.len(), 5, "{lines:?}");
    assert_eq!(
        lines[0],
        format!("INFO:connect:STARTED AT CWD: {}", cwd.display())
    );
    assert_eq!(
        lines[1],
        format!("INFO:connect:log_path: {}", cwd.join("app.log").display())
    );
    assert_eq!(
        lines[2],
        format!("INFO:connect:db_path: {}", cwd.join("db.db").display())
    );
    assert_eq!(lines[3], "INFO:connect:Successfully connected with db.db");
    assert_eq!(lines[4], "INFO:connect:FINISHED");
}
