//! Protocol client and concurrent scanner.
//!
//! The flow mirrors how the tool is used: [`discovery`] resolves the
//! server list from one or more masters, [`reconcile`] unions those
//! lists, [`scanner`] fans `getstatus` probes out over the result and
//! [`probe`] performs the single bounded query each task runs.

pub mod discovery;
pub mod error;
pub mod probe;
pub mod reconcile;
pub mod scanner;
