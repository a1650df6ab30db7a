//! # Status Probe
//!
//! One bounded `getstatus` exchange against a single game server.
//! Unreachable hosts are the common case at internet scale, so this
//! layer never fails: whatever goes wrong, the caller gets a record.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, warn};

use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;
use q3scout_protocols::error::WireError;
use q3scout_protocols::status;

const RECV_BUFFER_SIZE: usize = 4096;

/// Queries one game server, with exactly one send and one read.
///
/// Timeouts and socket errors come back as [`ServerStatus::offline`].
/// A reply that fails to decode is also reported absent, but loudly:
/// it means the host speaks a different protocol, not that it is down.
pub async fn query_status(addr: ServerAddr, status_timeout: Duration) -> ServerStatus {
    match attempt_query(addr, status_timeout).await {
        Ok(Ok(status)) => status,
        Ok(Err(wire_err)) => {
            warn!("{addr}: undecodable status reply: {wire_err}");
            ServerStatus::offline()
        }
        Err(err) => {
            debug!("{addr}: no status reply: {err}");
            ServerStatus::offline()
        }
    }
}

async fn attempt_query(
    addr: ServerAddr,
    status_timeout: Duration,
) -> anyhow::Result<Result<ServerStatus, WireError>> {
    let socket: UdpSocket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(SocketAddr::from(addr)).await?;
    socket.send(&status::getstatus_request()).await?;

    let mut buffer: [u8; RECV_BUFFER_SIZE] = [0u8; RECV_BUFFER_SIZE];
    let len: usize = timeout(status_timeout, socket.recv(&mut buffer)).await??;
    Ok(status::parse_status_response(&buffer[..len]))
}
