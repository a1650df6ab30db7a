use std::time::Instant;

use anyhow::Context;
use indicatif::ProgressBar;
use tracing::info;

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;
use q3scout_core::{discovery, scanner};

use crate::terminal::{print, spinner};

pub async fn scan(masters: &[String], game: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let targets = discovery::query_masters(masters, cfg)
        .await
        .context("master discovery failed")?;
    let total: usize = targets.len();
    info!("{total} unique servers listed");

    let progress: ProgressBar = spinner::scan_progress(total);
    let progress_ref: ProgressBar = progress.clone();
    let results = scanner::scan(
        targets,
        cfg,
        Some(Box::new(move |completed| {
            progress_ref.set_position(completed as u64);
        })),
    )
    .await;
    progress.finish_and_clear();

    let mut responding: Vec<(ServerAddr, ServerStatus)> = results
        .into_iter()
        .filter(|(_, status)| status.present)
        .collect();
    if let Some(game) = game {
        responding.retain(|(_, status)| status.game() == Some(game));
    }
    responding.sort_by_key(|(addr, _)| *addr);

    print::header("responding servers");
    for (addr, status) in &responding {
        print::server_block(addr, status);
    }
    print::summary(responding.len(), total, start_time.elapsed().as_secs_f64());

    Ok(())
}
