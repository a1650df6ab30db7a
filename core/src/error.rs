use q3scout_protocols::error::WireError;
use thiserror::Error;

/// Failure of a master discovery query.
///
/// An incomplete server list is a meaningful failure, so socket and
/// decode errors both surface here. Per-target status probes never
/// produce this type; unreachable game servers are expected and are
/// reported as absent records instead.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Socket-level failure other than the read timeout.
    #[error("socket error while querying master: {0}")]
    Network(#[from] std::io::Error),

    /// A reply packet that violates the wire format.
    #[error(transparent)]
    Wire(#[from] WireError),
}
