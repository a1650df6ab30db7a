//! Codec for the `getstatus` exchange.
//!
//! Request: `FF FF FF FF` + `getstatus`.
//! Reply: `FF FF FF FF` + `statusResponse`, then backslash-delimited
//! alternating key/value segments. The wire quirk: the player roster
//! is embedded after a newline inside the *last* value segment, one
//! line per player, space-tokenized.

use indexmap::IndexMap;
use q3scout_common::status::{PlayerRow, ServerStatus};

use crate::DELIMITER;
use crate::error::WireError;

const GETSTATUS: &[u8] = b"getstatus";

/// Builds the status request.
pub fn getstatus_request() -> Vec<u8> {
    let mut packet: Vec<u8> = Vec::with_capacity(crate::OOB_MARKER.len() + GETSTATUS.len());
    packet.extend_from_slice(&crate::OOB_MARKER);
    packet.extend_from_slice(GETSTATUS);
    packet
}

/// Decodes a status reply into a [`ServerStatus`] with `present = true`.
///
/// The first `\`-separated segment is framing (out-of-band marker plus
/// the `statusResponse` tag) and is discarded. Remaining segments pair
/// up key/value in order; a trailing key without a value fails with
/// [`WireError::MalformedStatus`]. A reply with no segments at all
/// still decodes: the server answered, it just has nothing to say.
pub fn parse_status_response(packet: &[u8]) -> Result<ServerStatus, WireError> {
    let mut segments = packet.split(|&byte| byte == DELIMITER);
    let _framing = segments.next();

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut pending_key: Option<String> = None;
    for segment in segments {
        let text: String = String::from_utf8_lossy(segment).into_owned();
        match pending_key.take() {
            None => pending_key = Some(text),
            Some(key) => pairs.push((key, text)),
        }
    }
    if pending_key.is_some() {
        return Err(WireError::MalformedStatus);
    }

    let players: Vec<PlayerRow> = match pairs.last_mut() {
        Some((_, last_value)) => extract_players(last_value),
        None => Vec::new(),
    };

    let mut fields: IndexMap<String, String> = IndexMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        fields.insert(key, value);
    }
    Ok(ServerStatus::new(fields, players))
}

/// Splits the player roster out of the last cvar's value, truncating
/// the value to its first line.
///
/// Lines strictly between the first and the last are player rows; the
/// final line is a trailing-newline artifact, not a player.
fn extract_players(last_value: &mut String) -> Vec<PlayerRow> {
    let lines: Vec<&str> = last_value.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let players: Vec<PlayerRow> = lines[1..lines.len() - 1]
        .iter()
        .map(|line| PlayerRow(line.split_whitespace().map(str::to_owned).collect()))
        .collect();

    *last_value = lines[0].to_owned();
    players
}
