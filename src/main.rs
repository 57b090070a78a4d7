// License: MIT

mod app;
mod cli;
mod core;
mod host;
mod log;

use clap::Parser;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Args::parse();

    app::watch::run(args).await
}
