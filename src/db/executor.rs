//! Query executor seam.
//!
//! The dispatcher only ever talks to an `Executor`; the production
//! implementation lives in `connection.rs`, tests drive a scripted fake.

use crate::db::render::render_result_set;
use crate::db::value::SqlValue;
use crate::errors::AppResult;
use std::io::Write;

/// SQL text plus its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Rows returned by the backend, already converted to text.
/// `None` cells are SQL NULLs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First cell of the first row, if any.
    pub fn scalar(&self) -> Option<&str> {
        self.rows.first()?.first()?.as_deref()
    }
}

pub trait Executor {
    /// Run a statement that produces no rows. Returns the affected-row count.
    fn execute(&mut self, statement: &Statement) -> AppResult<u64>;

    /// Run a statement and collect its rows.
    fn fetch(&mut self, statement: &Statement) -> AppResult<ResultSet>;

    /// Run a statement, render its rows tab-separated to `out`,
    /// and return how many rows were rendered.
    fn query(&mut self, statement: &Statement, out: &mut dyn Write) -> AppResult<usize> {
        let rs = self.fetch(statement)?;
        render_result_set(out, &rs)
    }
}
