use chrono::NaiveDate;
use postgres::types::ToSql;
use rust_decimal::Decimal;

/// A typed statement parameter.
///
/// Every operator-supplied value reaches the backend through one of these,
/// bound as `$n`; nothing is spliced into the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
    Numeric(Decimal),
    Bool(bool),
}

impl SqlValue {
    /// Borrow the inner value as a postgres parameter.
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlValue::Int(v) => v,
            SqlValue::BigInt(v) => v,
            SqlValue::Text(v) => v,
            SqlValue::Date(v) => v,
            SqlValue::Numeric(v) => v,
            SqlValue::Bool(v) => v,
        }
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::BigInt(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Numeric(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}
