//! Wire codec for the Quake III out-of-band UDP protocol.
//!
//! Every request and reply starts with the four-byte out-of-band
//! marker `FF FF FF FF` followed by an ASCII command tag. Two reply
//! shapes exist: the master's fixed-width server list ([`master`])
//! and a game server's backslash-delimited status block ([`status`]).
//!
//! This crate is pure: bytes in, typed records out. Sockets and
//! timeouts live in `q3scout-core`.

pub mod error;
pub mod master;
pub mod status;

/// Out-of-band packet marker preceding every command tag.
pub const OOB_MARKER: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Field and record delimiter (`\`) used by both reply formats.
pub const DELIMITER: u8 = 0x5C;
