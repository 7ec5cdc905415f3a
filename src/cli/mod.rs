pub mod commands;
pub mod console;
pub mod dispatcher;
pub mod menu;
pub mod parser;
