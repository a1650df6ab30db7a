//! # Server Status Model
//!
//! The decoded result of one `getstatus` exchange: the server's cvar
//! block as an ordered key/value map plus the raw player rows embedded
//! in the reply.

use indexmap::IndexMap;

/// One player line from a status reply, kept as the raw
/// whitespace-delimited tokens (typically score, ping, quoted name).
///
/// Column semantics and name quoting are presentation concerns; the
/// core never interprets the tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRow(pub Vec<String>);

impl PlayerRow {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

/// Snapshot of a single game server, produced per query attempt.
///
/// `present == false` means the host never answered (or the socket
/// errored); such a record always carries an empty field map and no
/// players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerStatus {
    /// Cvar block in wire order. A duplicated key keeps its first
    /// position but the last value wins.
    pub fields: IndexMap<String, String>,
    pub players: Vec<PlayerRow>,
    pub present: bool,
}

impl ServerStatus {
    pub fn new(fields: IndexMap<String, String>, players: Vec<PlayerRow>) -> Self {
        Self {
            fields,
            players,
            present: true,
        }
    }

    /// Record for a host that did not reply within its timeout.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn hostname(&self) -> Option<&str> {
        self.get("sv_hostname")
    }

    /// The mod the server is running, e.g. `CPMA` or `baseq3`.
    pub fn game(&self) -> Option<&str> {
        self.get("game").or_else(|| self.get("gamename"))
    }

    pub fn mapname(&self) -> Option<&str> {
        self.get("mapname")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServerStatus {
        let mut fields: IndexMap<String, String> = IndexMap::new();
        fields.insert("sv_hostname".into(), "My Server".into());
        fields.insert("game".into(), "CPMA".into());
        fields.insert("mapname".into(), "q3dm17".into());
        ServerStatus::new(fields, vec![PlayerRow(vec!["0".into(), "50".into()])])
    }

    #[test]
    fn accessors_resolve_known_cvars() {
        let status = sample();
        assert_eq!(status.hostname(), Some("My Server"));
        assert_eq!(status.game(), Some("CPMA"));
        assert_eq!(status.mapname(), Some("q3dm17"));
        assert_eq!(status.get("fraglimit"), None);
    }

    #[test]
    fn game_falls_back_to_gamename() {
        let mut fields: IndexMap<String, String> = IndexMap::new();
        fields.insert("gamename".into(), "osp".into());
        let status = ServerStatus::new(fields, Vec::new());
        assert_eq!(status.game(), Some("osp"));
    }

    #[test]
    fn offline_record_is_empty_and_absent() {
        let status = ServerStatus::offline();
        assert!(!status.present);
        assert!(status.fields.is_empty());
        assert!(status.players.is_empty());
    }
}
