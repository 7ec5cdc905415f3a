//! Postgres-backed executor (one blocking connection for the whole session).

use crate::db::executor::{Executor, ResultSet, Statement};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use postgres::types::{FromSql, ToSql};
use postgres::{Client, NoTls, Row};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Everything needed to open the session connection.
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl ConnectParams {
    /// Connection URL shown to the operator (never includes the password).
    pub fn url(&self) -> String {
        format!("postgresql://{}:{}/{}", self.host, self.port, self.dbname)
    }
}

pub struct PgExecutor {
    client: Client,
}

impl PgExecutor {
    pub fn connect(params: &ConnectParams) -> AppResult<Self> {
        let mut cfg = postgres::Config::new();
        cfg.host(&params.host)
            .port(params.port)
            .dbname(&params.dbname)
            .user(&params.user)
            .password(&params.password)
            .application_name(env!("CARGO_PKG_NAME"));

        let client = cfg
            .connect(NoTls)
            .map_err(|e| AppError::Connection(e.to_string()))?;

        info!(url = %params.url(), user = %params.user, "connected");
        Ok(Self { client })
    }

    /// Close the connection explicitly. Dropping the executor also closes it,
    /// so early exits release the connection too.
    pub fn close(self) -> AppResult<()> {
        self.client.close()?;
        info!("connection closed");
        Ok(())
    }

    fn params(statement: &Statement) -> Vec<&(dyn ToSql + Sync)> {
        statement.params.iter().map(|p| p.as_sql()).collect()
    }
}

impl Executor for PgExecutor {
    fn execute(&mut self, statement: &Statement) -> AppResult<u64> {
        debug!(sql = statement.sql, "execute");
        let affected = self
            .client
            .execute(statement.sql, &Self::params(statement))?;
        Ok(affected)
    }

    fn fetch(&mut self, statement: &Statement) -> AppResult<ResultSet> {
        debug!(sql = statement.sql, "query");
        let prepared = self.client.prepare(statement.sql)?;
        let columns = prepared
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let rows = self.client.query(&prepared, &Self::params(statement))?;

        let mut rs = ResultSet::new(columns);
        for row in &rows {
            let cells = (0..row.len())
                .map(|idx| cell_text(row, idx))
                .collect::<AppResult<Vec<_>>>()?;
            rs.add_row(cells);
        }

        debug!(rows = rs.rows.len(), "query done");
        Ok(rs)
    }
}

/// Convert one cell to its display text, whatever its column type.
fn cell_text(row: &Row, idx: usize) -> AppResult<Option<String>> {
    let ty = row.columns()[idx].type_();

    let text = match ty.name() {
        "bool" => row.try_get::<_, Option<bool>>(idx)?.map(|v| v.to_string()),
        "int2" => row.try_get::<_, Option<i16>>(idx)?.map(|v| v.to_string()),
        "int4" => row.try_get::<_, Option<i32>>(idx)?.map(|v| v.to_string()),
        "int8" => row.try_get::<_, Option<i64>>(idx)?.map(|v| v.to_string()),
        "float4" => row.try_get::<_, Option<f32>>(idx)?.map(|v| v.to_string()),
        "float8" => row.try_get::<_, Option<f64>>(idx)?.map(|v| v.to_string()),
        "numeric" => row
            .try_get::<_, Option<Decimal>>(idx)?
            .map(|v| v.to_string()),
        "date" => row
            .try_get::<_, Option<NaiveDate>>(idx)?
            .map(|v| v.format("%Y-%m-%d").to_string()),
        "timestamp" => row
            .try_get::<_, Option<NaiveDateTime>>(idx)?
            .map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string()),
        "timestamptz" => row
            .try_get::<_, Option<DateTime<Utc>>>(idx)?
            .map(|v| v.to_rfc3339()),
        // CHAR(n) comes back padded
        "bpchar" => row
            .try_get::<_, Option<String>>(idx)?
            .map(|v| v.trim_end().to_string()),
        _ if <String as FromSql<'_>>::accepts(ty) => row.try_get::<_, Option<String>>(idx)?,
        other => Some(format!("<{other}>")),
    };

    Ok(text)
}
