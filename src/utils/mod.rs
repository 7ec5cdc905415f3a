pub mod date;
pub mod fields;
