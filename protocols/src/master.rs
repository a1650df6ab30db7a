//! Codec for the master server exchange.
//!
//! Request: `FF FF FF FF` + `getservers 68 empty full`.
//! Reply: `FF FF FF FF` + `getserversResponse\` followed by 7-byte
//! groups of 6 payload bytes (4 IPv4 octets, big-endian port) and one
//! `\` delimiter. The final group may omit the trailing delimiter.

use std::net::Ipv4Addr;

use q3scout_common::network::addr::ServerAddr;

use crate::DELIMITER;
use crate::error::WireError;

const GETSERVERS: &[u8] = b"getservers 68 empty full";
const RESPONSE_HEADER: &[u8] = b"\xFF\xFF\xFF\xFFgetserversResponse\\";

/// Payload bytes per address record.
const RECORD_LEN: usize = 6;
/// Record plus its trailing delimiter.
const GROUP_LEN: usize = 7;

/// Builds the discovery request (protocol 68, empty and full servers
/// included).
pub fn getservers_request() -> Vec<u8> {
    let mut packet: Vec<u8> = Vec::with_capacity(crate::OOB_MARKER.len() + GETSERVERS.len());
    packet.extend_from_slice(&crate::OOB_MARKER);
    packet.extend_from_slice(GETSERVERS);
    packet
}

/// Decodes one master reply packet into the addresses it carries.
///
/// The fixed header is stripped by length; a packet shorter than the
/// header fails with [`WireError::MalformedPacket`]. A group whose
/// seventh byte is not the delimiter fails the whole packet with
/// [`WireError::FramingError`] rather than skipping the record. A
/// trailing fragment shorter than one record marks end-of-list and is
/// ignored.
pub fn parse_servers_response(packet: &[u8]) -> Result<Vec<ServerAddr>, WireError> {
    if packet.len() < RESPONSE_HEADER.len() {
        return Err(WireError::MalformedPacket);
    }
    let payload: &[u8] = &packet[RESPONSE_HEADER.len()..];

    let mut servers: Vec<ServerAddr> = Vec::with_capacity(payload.len() / GROUP_LEN + 1);
    let mut offset: usize = 0;
    while offset + RECORD_LEN <= payload.len() {
        let record: &[u8] = &payload[offset..offset + RECORD_LEN];
        let ip: Ipv4Addr = Ipv4Addr::new(record[0], record[1], record[2], record[3]);
        let port: u16 = u16::from_be_bytes([record[4], record[5]]);
        servers.push(ServerAddr::new(ip, port));

        // A full group must close with the delimiter; its absence on
        // the final record is valid end-of-list framing.
        if offset + RECORD_LEN < payload.len() && payload[offset + RECORD_LEN] != DELIMITER {
            return Err(WireError::FramingError {
                offset: offset + RECORD_LEN,
            });
        }
        offset += GROUP_LEN;
    }
    Ok(servers)
}

/// Builds a master reply packet for the given addresses.
///
/// The inverse of [`parse_servers_response`]; the final record carries
/// no trailing delimiter, matching what real masters send.
pub fn encode_servers_response(servers: &[ServerAddr]) -> Vec<u8> {
    let mut packet: Vec<u8> = Vec::with_capacity(RESPONSE_HEADER.len() + servers.len() * GROUP_LEN);
    packet.extend_from_slice(RESPONSE_HEADER);
    for (idx, server) in servers.iter().enumerate() {
        packet.extend_from_slice(&server.ip.octets());
        packet.extend_from_slice(&server.port.to_be_bytes());
        if idx + 1 != servers.len() {
            packet.push(DELIMITER);
        }
    }
    packet
}
