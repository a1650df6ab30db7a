//! Loopback UDP stand-ins for a master server and a game server.

use std::net::Ipv4Addr;

use tokio::net::UdpSocket;

use q3scout_common::network::addr::ServerAddr;
use q3scout_protocols::master;

fn local_addr(socket: &UdpSocket) -> ServerAddr {
    let addr = socket.local_addr().expect("fixture local addr");
    ServerAddr::new(Ipv4Addr::LOCALHOST, addr.port())
}

/// Master fixture: answers the first request with one reply packet per
/// address list, then goes quiet (the client's read timeout ends the
/// exchange, as with a real master).
pub async fn spawn_master(lists: Vec<Vec<ServerAddr>>) -> ServerAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind master fixture");
    let addr = local_addr(&socket);

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        let (_, peer) = socket.recv_from(&mut buf).await.expect("master fixture recv");
        for list in &lists {
            let packet = master::encode_servers_response(list);
            socket.send_to(&packet, peer).await.expect("master fixture send");
        }
    });
    addr
}

/// Game-server fixture: answers every datagram with the same canned
/// payload, so one fixture can serve repeated probes.
pub async fn spawn_game_server(reply: Vec<u8>) -> ServerAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind game fixture");
    let addr = local_addr(&socket);

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            let Ok((_, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let _ = socket.send_to(&reply, peer).await;
        }
    });
    addr
}

/// A bound socket that never answers. The socket is returned so the
/// test keeps the port open for the duration of the probe.
pub async fn spawn_silent_server() -> (ServerAddr, UdpSocket) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind silent fixture");
    let addr = local_addr(&socket);
    (addr, socket)
}

/// An address whose port was just closed again; probes against it hit
/// a socket error (ICMP port unreachable) instead of a clean timeout.
pub async fn closed_port_addr() -> ServerAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind throwaway socket");
    let addr = local_addr(&socket);
    drop(socket);
    addr
}
