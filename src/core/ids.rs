//! Next-identifier computation for the "add" forms.
//!
//! Reads max(id) and adds one. This is a read-then-insert with no
//! transaction around it, which is only sound while a single operator
//! drives the session.

use crate::db::{Executor, Statement};
use crate::errors::{AppError, AppResult};

/// Tables whose identifiers are allocated client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    Customer,
    MaintenanceCompany,
    Repair,
    Booking,
    Assignment,
    Request,
}

impl IdSource {
    pub fn max_sql(&self) -> &'static str {
        match self {
            IdSource::Customer => "SELECT MAX(customerID) AS max_id FROM customer",
            IdSource::MaintenanceCompany => "SELECT MAX(cmpID) AS max_id FROM maintenanceCompany",
            IdSource::Repair => "SELECT MAX(rID) AS max_id FROM repair",
            IdSource::Booking => "SELECT MAX(bID) AS max_id FROM booking",
            IdSource::Assignment => "SELECT MAX(asgID) AS max_id FROM assigned",
            IdSource::Request => "SELECT MAX(reqID) AS max_id FROM request",
        }
    }
}

/// Successor of the current maximum; an empty collection starts at 1.
pub fn next_after(max: Option<i32>) -> AppResult<i32> {
    max.unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::Statement("identifier space exhausted".into()))
}

pub fn next_id(exec: &mut dyn Executor, source: IdSource) -> AppResult<i32> {
    let rs = exec.fetch(&Statement::new(source.max_sql()))?;

    let max = match rs.scalar() {
        Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| {
            AppError::Statement(format!("unexpected identifier value '{raw}'"))
        })?),
        None => None,
    };

    next_after(max)
}
