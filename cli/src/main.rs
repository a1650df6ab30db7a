mod commands;
mod terminal;

use commands::{CommandLine, Commands, scan, status, watch};
use q3scout_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg: Config = commands.config();

    match commands.command {
        Commands::Scan { masters, game } => scan::scan(&masters, game.as_deref(), &cfg).await,
        Commands::Status { target } => status::status(target, &cfg).await,
        Commands::Watch {
            masters,
            interval,
            game,
        } => watch::watch(&masters, interval, game.as_deref(), &cfg).await,
    }
}
