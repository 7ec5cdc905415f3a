use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for hoteldesk
/// Menu-driven console for the hotel-management database
#[derive(Parser, Debug)]
#[command(
    name = "hoteldesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A menu-driven console for a Postgres hotel-management database",
    long_about = None
)]
pub struct Cli {
    /// Name of the database to open
    pub dbname: String,

    /// Port the Postgres server listens on
    pub port: u16,

    /// Database user to log in as
    pub user: String,

    /// Override the server host from the configuration file
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Use this configuration file instead of ~/.hoteldesk/hoteldesk.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
