//! # Server Address Model
//!
//! A game server is identified by an IPv4 address and a UDP port.
//! `ServerAddr` is the key type used across the workspace: the master
//! decoder produces it, the reconciler dedups on it and the scanner
//! keys its results by it.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use thiserror::Error;

/// Address of a single game server.
///
/// Equality and hashing are by value, so the type can be used directly
/// as a set or map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServerAddr {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl ServerAddr {
    pub fn new(ip: Ipv4Addr, port: u16) -> Self {
        Self { ip, port }
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

impl From<ServerAddr> for SocketAddr {
    fn from(addr: ServerAddr) -> Self {
        SocketAddr::V4(SocketAddrV4::new(addr.ip, addr.port))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid server address '{0}', expected ip:port")]
pub struct ParseAddrError(String);

impl FromStr for ServerAddr {
    type Err = ParseAddrError;

    /// Parses `"ip:port"` with a dotted-quad IPv4 address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip_str, port_str) = s
            .split_once(':')
            .ok_or_else(|| ParseAddrError(s.to_string()))?;
        let ip: Ipv4Addr = ip_str
            .parse()
            .map_err(|_| ParseAddrError(s.to_string()))?;
        let port: u16 = port_str
            .parse()
            .map_err(|_| ParseAddrError(s.to_string()))?;
        Ok(Self { ip, port })
    }
}
