//! Tab-separated result rendering.

use crate::db::executor::ResultSet;
use crate::errors::AppResult;
use std::io::Write;

const NULL_CELL: &str = "null";

/// Write the header line (only when there is at least one row) followed by
/// one line per row. Returns the number of rows written.
pub fn render_result_set(out: &mut dyn Write, rs: &ResultSet) -> AppResult<usize> {
    if rs.is_empty() {
        return Ok(0);
    }

    writeln!(out, "{}", rs.columns.join("\t"))?;

    for row in &rs.rows {
        let line: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(NULL_CELL))
            .collect();
        writeln!(out, "{}", line.join("\t"))?;
    }

    out.flush()?;
    Ok(rs.rows.len())
}
