use crate::db::Executor;
use crate::errors::AppResult;
use crate::models::Insertable;
use std::io::Write;
use tracing::info;

pub struct AddLogic;

impl AddLogic {
    /// Echo the record back to the operator, then insert it.
    pub fn apply<T: Insertable>(
        exec: &mut dyn Executor,
        out: &mut dyn Write,
        record: &T,
    ) -> AppResult<()> {
        writeln!(out, "{}", record.summary())?;

        let statement = record.insert_statement();
        let affected = exec.execute(&statement)?;

        info!(rows = affected, "record inserted");
        Ok(())
    }
}
