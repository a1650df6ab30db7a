//! Display-layer helpers for decoded status records.
//!
//! Everything here is a presentation heuristic the protocol core
//! deliberately stays out of: color-code stripping, player-name
//! extraction from raw tokens and the bot filter.

use q3scout_common::status::{PlayerRow, ServerStatus};

/// Strips Quake color declarations (`^` plus one character) from a
/// display string.
pub fn strip_color_codes(text: &str) -> String {
    let mut cleaned: String = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '^' {
            let _ = chars.next();
        } else {
            cleaned.push(ch);
        }
    }
    cleaned
}

/// Extracts a printable name from a raw player row.
///
/// Rows are whitespace-tokenized score, ping, then the quoted name;
/// names with embedded spaces span several tokens, so everything past
/// the second token is rejoined before trimming the quotes.
pub fn player_name(row: &PlayerRow) -> Option<String> {
    let tokens: &[String] = row.tokens();
    if tokens.len() < 3 {
        return None;
    }
    let quoted: String = tokens[2..].join(" ");
    let name: &str = quoted.trim_matches('"');
    Some(strip_color_codes(name))
}

/// Bots report a ping of zero; a row whose ping token is `"0"` is
/// treated as one.
pub fn is_bot(row: &PlayerRow) -> bool {
    row.tokens().get(1).is_some_and(|ping| ping == "0")
}

/// Names of the human players in a status record.
pub fn human_players(status: &ServerStatus) -> Vec<String> {
    status
        .players
        .iter()
        .filter(|row| !is_bot(row))
        .filter_map(player_name)
        .collect()
}
