pub mod scan;
pub mod status;
pub mod watch;

use std::time::Duration;

use clap::{Parser, Subcommand};
use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;

fn default_masters() -> Vec<String> {
    vec![
        "master.quake3arena.com".to_string(),
        "master.ioquake3.org".to_string(),
    ]
}

#[derive(Parser)]
#[command(name = "q3scout")]
#[command(about = "A Quake III master-server and status scanner.")]
pub struct CommandLine {
    /// Per-server status timeout in milliseconds
    #[arg(long, default_value_t = 100)]
    pub timeout_ms: u64,

    /// Per-read master reply timeout in milliseconds
    #[arg(long, default_value_t = 250)]
    pub master_timeout_ms: u64,

    /// UDP port master servers listen on
    #[arg(long, default_value_t = 27950)]
    pub master_port: u16,

    /// Maximum concurrent status queries
    #[arg(long, default_value_t = 64)]
    pub concurrency: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover servers from the master list and scan them all
    #[command(alias = "s")]
    Scan {
        /// Master server to query (repeatable)
        #[arg(long = "master", default_values_t = default_masters())]
        masters: Vec<String>,

        /// Only show servers whose "game" cvar matches this mod
        #[arg(long)]
        game: Option<String>,
    },
    /// Query a single server for its status
    Status {
        /// Target in the format ip:port
        target: ServerAddr,
    },
    /// Poll the server list and report newly joined players
    #[command(alias = "w")]
    Watch {
        /// Master server to query (repeatable)
        #[arg(long = "master", default_values_t = default_masters())]
        masters: Vec<String>,

        /// Seconds between polling cycles
        #[arg(long, default_value_t = 30)]
        interval: u64,

        /// Only watch servers whose "game" cvar matches this mod
        #[arg(long)]
        game: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            master_port: self.master_port,
            master_timeout: Duration::from_millis(self.master_timeout_ms),
            status_timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.concurrency,
        }
    }
}
