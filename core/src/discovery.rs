//! # Master Server Discovery
//!
//! Resolves the list of registered game servers from one or more
//! master servers. A master answers a single `getservers` request with
//! as many reply packets as its list needs; there is no explicit end
//! marker, so silence for one read-timeout is the termination signal.

use std::collections::HashSet;

use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::info;

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_protocols::master;

use crate::error::QueryError;
use crate::reconcile;

const RECV_BUFFER_SIZE: usize = 4096;

/// Queries one master server and drains its reply packets.
///
/// Each packet is decoded independently and the address sequences are
/// concatenated. The read timeout firing with nothing more to read
/// ends the loop; any other socket error aborts the query, as does a
/// packet that fails to decode.
pub async fn query_master(host: &str, cfg: &Config) -> Result<Vec<ServerAddr>, QueryError> {
    let socket: UdpSocket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect((host, cfg.master_port)).await?;
    socket.send(&master::getservers_request()).await?;

    let mut servers: Vec<ServerAddr> = Vec::new();
    let mut buffer: [u8; RECV_BUFFER_SIZE] = [0u8; RECV_BUFFER_SIZE];
    loop {
        match timeout(cfg.master_timeout, socket.recv(&mut buffer)).await {
            Ok(Ok(len)) => {
                servers.extend(master::parse_servers_response(&buffer[..len])?);
            }
            Ok(Err(err)) => return Err(QueryError::Network(err)),
            Err(_elapsed) => break,
        }
    }
    Ok(servers)
}

/// Queries every master in turn and unions the per-master lists into
/// one deduplicated target set.
pub async fn query_masters(
    hosts: &[String],
    cfg: &Config,
) -> Result<HashSet<ServerAddr>, QueryError> {
    let mut lists: Vec<Vec<ServerAddr>> = Vec::with_capacity(hosts.len());
    for host in hosts {
        let servers: Vec<ServerAddr> = query_master(host, cfg).await?;
        info!("{host} listed {} servers", servers.len());
        lists.push(servers);
    }
    Ok(reconcile::union(&lists))
}
