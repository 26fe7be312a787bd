//! Demo entry point.
//!
//! # Responsibility
//! - Wire the repositories to an opened database and invoke the requested
//!   one-shot runner: `doc`, `sql`, or `all` (default).
//!
//! Usage: `peoplestore [doc|sql|all] [db-path]`
//! Without a db path both demos run against an in-memory database.

use log::error;
use peoplestore_core::db::{open_db, open_db_in_memory, DbResult};
use peoplestore_core::{
    default_log_level, init_logging, DocCustomerRepository, DocRunner, RepoResult,
    SqlCustomerRepository, SqlRunner,
};
use rusqlite::Connection;
use std::process::ExitCode;

#[derive(Clone, Copy)]
enum Mode {
    Doc,
    Sql,
    All,
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let mode = match args.next().as_deref() {
        None | Some("all") => Mode::All,
        Some("doc") => Mode::Doc,
        Some("sql") => Mode::Sql,
        Some(other) => {
            eprintln!("unknown mode `{other}`; expected doc|sql|all");
            return ExitCode::FAILURE;
        }
    };
    let db_path = args.next();

    let log_dir = std::env::temp_dir().join("peoplestore-logs");
    let log_dir = match log_dir.to_str() {
        Some(dir) => dir.to_string(),
        None => {
            eprintln!("log directory path is not valid UTF-8");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let conn = match open_connection(db_path.as_deref()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=demo_abort module=cli status=error error={err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(mode, &conn) {
        error!("event=demo_abort module=cli status=error error={err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn open_connection(db_path: Option<&str>) -> DbResult<Connection> {
    match db_path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
}

fn run(mode: Mode, conn: &Connection) -> RepoResult<()> {
    if matches!(mode, Mode::Doc | Mode::All) {
        DocRunner::new(DocCustomerRepository::new(conn)).run()?;
    }
    if matches!(mode, Mode::Sql | Mode::All) {
        SqlRunner::new(SqlCustomerRepository::new(conn)).run()?;
    }
    Ok(())
}
