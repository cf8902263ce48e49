use anyhow::Context;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::warn;

use crate::palette::{seed_palettes, Palette};

/// Fixed key the whole collection is serialized under.
const PALETTES_KEY: &str = "palettes";

/// Key-value store holding the palette collection as one JSON array.
///
/// Opening can fail (nothing works without the database), but the palette
/// operations never return errors: read failures degrade to an empty
/// collection and write failures drop the write, both logged.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    fn read_value(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key=?1")
            .context("prepare kv read")?;
        let mut rows = stmt.query(params![key]).context("query kv")?;
        if let Some(row) = rows.next().context("read kv row")? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    fn write_value(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.conn
            .execute(
                r#"
INSERT INTO kv(key, value)
VALUES(?1, ?2)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value
"#,
                params![key, value],
            )
            .context("write kv")?;
        Ok(())
    }

    /// All stored palettes in insertion order. Missing or unreadable data
    /// yields an empty list.
    pub fn get_all(&self) -> Vec<Palette> {
        match self.read_value(PALETTES_KEY) {
            Ok(Some(raw)) => decode_palettes(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("palette read failed, treating as empty: {e:#}");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `palettes`. A failed write
    /// leaves the prior persisted state in place.
    pub fn replace_all(&self, palettes: &[Palette]) {
        let raw = match serde_json::to_string(palettes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("palette serialize failed, dropping write: {e}");
                return;
            }
        };
        if let Err(e) = self.write_value(PALETTES_KEY, &raw) {
            warn!("palette write failed, dropping write: {e:#}");
        }
    }

    pub fn add(&self, palette: Palette) {
        let mut palettes = self.get_all();
        palettes.push(palette);
        self.replace_all(&palettes);
    }

    /// Remove the palette with the given id. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        let palettes: Vec<Palette> = self
            .get_all()
            .into_iter()
            .filter(|p| p.id != id)
            .collect();
        self.replace_all(&palettes);
    }

    /// Write the example palettes on first run. No-op when the store
    /// already holds data.
    pub fn seed_if_empty(&self) {
        if self.get_all().is_empty() {
            self.replace_all(&seed_palettes());
        }
    }
}

/// Decode the stored JSON array, keeping the records that still parse.
/// A record with the wrong color count or an unknown temperature is
/// logged and dropped; a value that is not an array at all counts as
/// corrupt and reads as empty.
fn decode_palettes(raw: &str) -> Vec<Palette> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("stored palettes are corrupt, treating as empty: {e}");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value::<Palette>(v) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("dropping malformed palette record #{i}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Temperature;

    fn make_palette(title: &str) -> Palette {
        Palette::new(
            title,
            ["#111111".into(), "#222222".into(), "#333333".into()],
            Temperature::Cool,
        )
    }

    #[test]
    fn test_add_remove_insertion_order() {
        let storage = Storage::open_in_memory().unwrap();

        let a = make_palette("a");
        let b = make_palette("b");
        let c = make_palette("c");
        storage.add(a.clone());
        storage.add(b.clone());
        storage.add(c.clone());

        storage.remove(&b.id);

        let titles: Vec<String> = storage.get_all().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        storage.add(make_palette("only"));

        storage.remove("no-such-id");

        assert_eq!(storage.get_all().len(), 1);
    }

    #[test]
    fn test_seed_if_empty_idempotent() {
        let storage = Storage::open_in_memory().unwrap();

        storage.seed_if_empty();
        storage.seed_if_empty();

        let palettes = storage.get_all();
        assert_eq!(palettes.len(), 3);
        assert_eq!(palettes[0].title, "Marcy");
        assert_eq!(palettes[1].title, "Sleek and Modern");
        assert_eq!(palettes[2].title, "Winter Reds");
    }

    #[test]
    fn test_seed_if_empty_keeps_user_data() {
        let storage = Storage::open_in_memory().unwrap();
        storage.add(make_palette("mine"));

        storage.seed_if_empty();

        let palettes = storage.get_all();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].title, "mine");
    }

    #[test]
    fn test_replace_all_round_trip() {
        let storage = Storage::open_in_memory().unwrap();
        let palettes = vec![make_palette("x"), make_palette("y")];

        storage.replace_all(&palettes);

        assert_eq!(storage.get_all(), palettes);
    }

    #[test]
    fn test_corrupt_blob_reads_empty() {
        let storage = Storage::open_in_memory().unwrap();
        storage.write_value(PALETTES_KEY, "not json at all").unwrap();
        assert!(storage.get_all().is_empty());

        storage.write_value(PALETTES_KEY, r#"{"id":"x"}"#).unwrap();
        assert!(storage.get_all().is_empty());
    }

    #[test]
    fn test_malformed_records_dropped() {
        let storage = Storage::open_in_memory().unwrap();
        // One good record, one with two colors, one with an unknown
        // temperature. Only the good one survives.
        let raw = r##"[
            {"id":"ok","title":"Good","colors":["#111111","#222222","#333333"],"temperature":"warm"},
            {"id":"short","title":"Two colors","colors":["#111111","#222222"],"temperature":"cool"},
            {"id":"odd","title":"Odd temp","colors":["#111111","#222222","#333333"],"temperature":"tepid"}
        ]"##;
        storage.write_value(PALETTES_KEY, raw).unwrap();

        let palettes = storage.get_all();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].id, "ok");
    }
}
