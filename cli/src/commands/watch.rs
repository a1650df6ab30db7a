//! Polling loop that reports newly joined players.
//!
//! Keeps one in-memory map from server address to its last-seen status
//! record, refreshed every cycle. Roster diffing and the bot filter
//! are display heuristics living here, not in the protocol core.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use colored::*;
use tracing::{info, warn};

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;
use q3scout_core::{discovery, scanner};

use crate::terminal::format;

pub async fn watch(
    masters: &[String],
    interval_secs: u64,
    game: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let interval: Duration = Duration::from_secs(interval_secs);
    let mut last_seen: HashMap<ServerAddr, ServerStatus> = HashMap::new();

    loop {
        info!("checking servers");
        if let Err(err) = cycle(masters, game, cfg, &mut last_seen).await {
            warn!("scan cycle failed: {err}");
        }
        info!("waiting {interval_secs} seconds to rescan");
        tokio::time::sleep(interval).await;
    }
}

async fn cycle(
    masters: &[String],
    game: Option<&str>,
    cfg: &Config,
    last_seen: &mut HashMap<ServerAddr, ServerStatus>,
) -> anyhow::Result<()> {
    let targets = discovery::query_masters(masters, cfg).await?;
    let results = scanner::scan(targets, cfg, None).await;

    let mut responding: Vec<(ServerAddr, ServerStatus)> = results
        .into_iter()
        .filter(|(_, status)| status.present)
        .collect();
    if let Some(game) = game {
        responding.retain(|(_, status)| status.game() == Some(game));
    }
    info!("{} responding servers", responding.len());

    for (addr, status) in responding {
        let current: HashSet<String> = format::human_players(&status).into_iter().collect();

        match last_seen.get(&addr) {
            Some(previous_status) => {
                let previous: HashSet<String> =
                    format::human_players(previous_status).into_iter().collect();
                let arrived: Vec<&String> = current.difference(&previous).collect();
                if !arrived.is_empty() {
                    announce(&addr, &status, "new players", &arrived);
                }
            }
            None => {
                let humans: Vec<&String> = current.iter().collect();
                if !humans.is_empty() {
                    announce(&addr, &status, "humans playing", &humans);
                }
            }
        }
        last_seen.insert(addr, status);
    }
    Ok(())
}

fn announce(addr: &ServerAddr, status: &ServerStatus, what: &str, names: &[&String]) {
    let hostname: String = status
        .hostname()
        .map(format::strip_color_codes)
        .unwrap_or_else(|| "unknown server".to_string());
    let joined: String = names
        .iter()
        .map(|name| name.as_str())
        .collect::<Vec<&str>>()
        .join(", ");

    println!(
        "{} {} on {} {}: {}",
        "»".yellow().bold(),
        what.yellow().bold(),
        addr.to_string().green(),
        hostname.cyan(),
        joined.bold()
    );
}
