use tracing::warn;

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;
use q3scout_core::probe;

use crate::terminal::print;

pub async fn status(target: ServerAddr, cfg: &Config) -> anyhow::Result<()> {
    let status: ServerStatus = probe::query_status(target, cfg.status_timeout).await;

    if status.present {
        print::server_block(&target, &status);
    } else {
        warn!("{target} did not reply within {:?}", cfg.status_timeout);
    }
    Ok(())
}
