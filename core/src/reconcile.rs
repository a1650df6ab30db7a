//! Merges per-master address lists into one target set.

use std::collections::HashSet;

use q3scout_common::network::addr::ServerAddr;

/// Pure set union keyed on `(ip, port)` equality.
///
/// The decoder already emits canonical addresses, so no normalization
/// happens here.
pub fn union(lists: &[Vec<ServerAddr>]) -> HashSet<ServerAddr> {
    lists.iter().flatten().copied().collect()
}
