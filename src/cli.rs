//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Read settings from this file instead of the default location
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. `flipswitch=debug`)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Hide the switch history in the status line
    #[arg(long)]
    pub no_history: bool,
}
