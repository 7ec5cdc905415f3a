pub mod add;
pub mod ids;
pub mod reports;
