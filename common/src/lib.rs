//! Shared value types for the q3scout workspace.
//!
//! Everything in here is plain data: server addresses, decoded status
//! records and the runtime configuration passed into the core. No I/O
//! happens in this crate.

pub mod config;
pub mod network;
pub mod status;
