//! ocictl - Main entry point

use clap::Parser;
use log::{debug, info};

use ocictl::{commands, logging, Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    info!("Starting ocictl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: profile={}, command={:?}", cli.profile, cli.command);

    let result = match &cli.command {
        Command::List(args) => commands::list::run(args, &cli.profile).await,
        Command::View(args) => commands::view::run(args, &cli.profile).await,
        Command::Sweep(args) => commands::sweep::run(args, &cli.profile).await,
        Command::Search(args) => commands::search::run(args, &cli.profile).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
