//! hoteldesk library root.
//! Exposes the CLI parser, the menu dispatcher, the high-level run() function,
//! and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::console::Console;
use cli::dispatcher::Dispatcher;
use cli::parser::Cli;
use config::Config;
use db::PgExecutor;
use db::connection::ConnectParams;
use errors::AppResult;
use std::io::{self, Write};
use ui::messages;

/// Build connection parameters from the command line and configuration.
pub fn connect_params(cli: &Cli, cfg: &Config) -> ConnectParams {
    ConnectParams {
        host: cli.host.clone().unwrap_or_else(|| cfg.host.clone()),
        port: cli.port,
        dbname: cli.dbname.clone(),
        user: cli.user.clone(),
        password: cfg.password.clone(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI (wrong argument count exits here with usage)
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cfg.logging.init();

    print!("{}", messages::banner("User Interface"));

    // 3️⃣ connect; failure here is fatal
    let params = connect_params(&cli, &cfg);
    print!("Connecting to database...");
    io::stdout().flush()?;
    messages::info(format!("Connection URL: {}\n", params.url()));

    let mut exec = match PgExecutor::connect(&params) {
        Ok(exec) => exec,
        Err(e) => {
            messages::warning("Make sure you started postgres on this machine");
            return Err(e);
        }
    };
    messages::success("Done");

    // 4️⃣ menu loop; the connection is dropped on every path out of here
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let outcome = Dispatcher::new(&mut exec, console).run();

    print!("Disconnecting from database...");
    io::stdout().flush()?;
    exec.close()?;
    println!("Done\n\nBye !");

    outcome
}
