#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hoteldesk::cli::console::Console;
use hoteldesk::cli::dispatcher::Dispatcher;
use hoteldesk::db::{Executor, ResultSet, Statement};
use hoteldesk::errors::{AppError, AppResult};
use std::collections::VecDeque;
use std::io::Cursor;

pub fn hd() -> Command {
    cargo_bin_cmd!("hoteldesk")
}

/// In-memory executor: records every statement and answers fetches
/// from a queue (an empty result set once the queue runs dry).
#[derive(Default)]
pub struct FakeExecutor {
    pub executed: Vec<Statement>,
    pub fetched: Vec<Statement>,
    pub responses: VecDeque<Result<ResultSet, String>>,
    pub execute_error: Option<String>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, rs: ResultSet) -> Self {
        self.responses.push_back(Ok(rs));
        self
    }

    pub fn fail_fetch(mut self, msg: &str) -> Self {
        self.responses.push_back(Err(msg.to_string()));
        self
    }

    pub fn fail_execute(mut self, msg: &str) -> Self {
        self.execute_error = Some(msg.to_string());
        self
    }
}

impl Executor for FakeExecutor {
    fn execute(&mut self, statement: &Statement) -> AppResult<u64> {
        self.executed.push(statement.clone());
        match &self.execute_error {
            Some(msg) => Err(AppError::Statement(msg.clone())),
            None => Ok(1),
        }
    }

    fn fetch(&mut self, statement: &Statement) -> AppResult<ResultSet> {
        self.fetched.push(statement.clone());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Ok(ResultSet::default()))
            .map_err(AppError::Statement)
    }
}

pub fn result_set(columns: &[&str], rows: &[&[Option<&str>]]) -> ResultSet {
    let mut rs = ResultSet::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        rs.add_row(row.iter().map(|c| c.map(str::to_string)).collect());
    }
    rs
}

/// What `SELECT MAX(id)` returns: always one row, NULL on an empty table.
pub fn max_id(max: Option<i32>) -> ResultSet {
    let cell = max.map(|m| m.to_string());
    result_set(&["max_id"], &[&[cell.as_deref()]])
}

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn console(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Run the menu loop over `script` and return everything written to stdout.
pub fn drive(exec: &mut FakeExecutor, script: &str) -> String {
    drive_bytes(exec, script.as_bytes())
}

/// Like `drive`, for input that is not necessarily UTF-8.
pub fn drive_bytes(exec: &mut FakeExecutor, script: &[u8]) -> String {
    let console = Console::new(Cursor::new(script.to_vec()), Vec::new());
    let mut dispatcher = Dispatcher::new(exec, console);
    dispatcher.run().expect("dispatcher run");
    String::from_utf8(dispatcher.into_console().into_output()).expect("utf8 output")
}

pub fn prompt_count(output: &str) -> usize {
    output.matches("Please make your choice: ").count()
}

pub fn last_line(output: &str) -> &str {
    output
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or_default()
}
