pub mod connection;
pub mod executor;
pub mod render;
pub mod value;

pub use connection::PgExecutor;
pub use executor::{Executor, ResultSet, Statement};
pub use value::SqlValue;
