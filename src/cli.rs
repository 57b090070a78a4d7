// License: MIT

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "buildtimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solution build timer"
)]
pub struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long, action)]
    pub verbose: bool,

    /// Write the diagnostic log to FILE instead of the cache directory
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
