//! The persisted leaderboard: a flat name-to-score JSON file.

use std::{cmp::Reverse, fmt, fs, io, path::Path};

use anyhow::Context as _;
use serde::{
    Deserialize, Serialize,
    de::{self, MapAccess},
    ser::SerializeMap as _,
};

/// Name-to-score mapping backed by `leaderboard.txt`.
///
/// Entries keep their insertion order; saving under an existing name
/// overwrites that score in place. Display order is score descending, with
/// tied scores left in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<(String, i64)>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_score(&mut self, name: &str, score: i64) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((name.to_string(), score)),
        }
    }

    /// Entries sorted by score descending. The sort is stable, so tied
    /// scores stay in insertion order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut ranked: Vec<_> = self
            .entries
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        ranked.sort_by_key(|&(_, score)| Reverse(score));
        ranked
    }

    /// Reads the leaderboard file.
    ///
    /// Returns `Ok(None)` when the file does not exist; callers must treat
    /// that distinctly from an existing but empty leaderboard. A file with
    /// only whitespace is an empty leaderboard; any other content must parse
    /// as JSON or the error propagates.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read leaderboard file: {}", path.display())
                });
            }
        };
        if text.trim().is_empty() {
            return Ok(Some(Self::new()));
        }
        let board = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse leaderboard file: {}", path.display()))?;
        Ok(Some(board))
    }

    /// Rewrites the leaderboard file in full, as a JSON object indented with
    /// four spaces.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("failed to serialize leaderboard")?;
        buf.push(b'\n');
        fs::write(path, buf)
            .with_context(|| format!("failed to write leaderboard file: {}", path.display()))?;
        Ok(())
    }
}

/// Records `score` under `name` and rewrites the file.
///
/// Unlike [`Leaderboard::load`], a missing file here means an empty store:
/// saving is how the file comes into existence in the first place.
pub fn record_score(path: &Path, name: &str, score: i64) -> anyhow::Result<Leaderboard> {
    let mut board = Leaderboard::load(path)?.unwrap_or_default();
    board.set_score(name, score);
    board.save(path)?;
    Ok(board)
}

impl Serialize for Leaderboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LeaderboardVisitor;

        impl<'de> de::Visitor<'de> for LeaderboardVisitor {
            type Value = Leaderboard;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of player names to integer scores")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut board = Leaderboard::new();
                while let Some((name, score)) = access.next_entry::<String, i64>()? {
                    board.set_score(&name, score);
                }
                Ok(board)
            }
        }

        deserializer.deserialize_map(LeaderboardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// A unique scratch path per test; tests clean up after themselves.
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("noxo-leaderboard-{}-{name}.txt", std::process::id()))
    }

    fn board(entries: &[(&str, i64)]) -> Leaderboard {
        let mut board = Leaderboard::new();
        for &(name, score) in entries {
            board.set_score(name, score);
        }
        board
    }

    #[test]
    fn test_ranked_sorts_by_score_descending() {
        let board = board(&[("ada", 1), ("grace", 3), ("alan", -1)]);
        assert_eq!(board.ranked(), vec![("grace", 3), ("ada", 1), ("alan", -1)]);
    }

    #[test]
    fn test_ranked_keeps_insertion_order_on_ties() {
        let board = board(&[("ada", 2), ("grace", 5), ("alan", 2), ("edsger", 5)]);
        assert_eq!(
            board.ranked(),
            vec![("grace", 5), ("edsger", 5), ("ada", 2), ("alan", 2)]
        );
    }

    #[test]
    fn test_set_score_overwrites_in_place() {
        let mut board = board(&[("ada", 1), ("grace", 2)]);
        board.set_score("ada", 7);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"ada":7,"grace":2}"#);
    }

    #[test]
    fn test_save_writes_four_space_indented_json() {
        let path = temp_path("format");
        let mut board = Leaderboard::new();
        board.set_score("ada", 2);
        board.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"ada\": 2\n}\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let path = temp_path("roundtrip");
        let saved = board(&[("ada", 3), ("grace", -1), ("alan", 0)]);
        saved.save(&path).unwrap();

        let loaded = Leaderboard::load(&path).unwrap().unwrap();
        assert_eq!(loaded, saved);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let path = temp_path("missing");
        assert!(Leaderboard::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_whitespace_file_is_empty_leaderboard() {
        let path = temp_path("whitespace");
        fs::write(&path, "  \n\t\n").unwrap();
        let board = Leaderboard::load(&path).unwrap().unwrap();
        assert!(board.is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json at all").unwrap();
        assert!(Leaderboard::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_record_score_creates_and_updates_the_file() {
        let path = temp_path("record");
        record_score(&path, "ada", 1).unwrap();
        let board = record_score(&path, "ada", 4).unwrap();

        assert_eq!(board.ranked(), vec![("ada", 4)]);
        let reloaded = Leaderboard::load(&path).unwrap().unwrap();
        assert_eq!(reloaded, board);
        fs::remove_file(&path).unwrap();
    }
}
