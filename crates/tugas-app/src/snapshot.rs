//! Durable snapshot of the todo form.
//!
//! The full row collection is serialized to a single well-known file on every
//! change and restored on load. The wire format is the JSON object array the
//! form has always stored: `{"id": "<string>", "text", "optionValue",
//! "checked"}` per row, ids encoded as strings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tugas_core::prelude::*;
use tugas_core::{Priority, Row};

/// Well-known snapshot file name under the data directory.
pub const SNAPSHOT_FILENAME: &str = "todos.json";

/// One serialized row. Missing fields fall back to the control defaults.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "optionValue")]
    option_value: String,
    #[serde(default)]
    checked: bool,
}

impl SnapshotEntry {
    fn from_row(row: &Row) -> Self {
        Self {
            id: row.id.to_string(),
            text: row.text.clone(),
            option_value: row.priority.to_string(),
            checked: row.checked,
        }
    }

    /// Materialize a row, tolerating malformed fields.
    ///
    /// An unrecognized `optionValue` degrades to the selector default; an
    /// unparsable id drops the whole entry (there is nothing to relabel
    /// against).
    fn into_row(self) -> Option<Row> {
        let id = match self.id.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                warn!("Dropping snapshot entry with unparsable id {:?}", self.id);
                return None;
            }
        };

        let mut row = Row::fresh(id);
        row.text = self.text;
        row.priority = self
            .option_value
            .parse::<Priority>()
            .unwrap_or_default();
        row.checked = self.checked;
        Some(row)
    }
}

/// Serializes the row collection to a single durable slot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store under the conventional file name in `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SNAPSHOT_FILENAME),
        }
    }

    /// Store at an explicit path (tests, custom layouts).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the snapshot with the full ordered row collection.
    ///
    /// Uses atomic write (temp file + rename) for safety.
    pub fn save(&self, rows: &[Row]) -> Result<()> {
        let entries: Vec<SnapshotEntry> = rows.iter().map(SnapshotEntry::from_row).collect();
        let content = serde_json::to_string_pretty(&entries)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::store(format!("Failed to create data dir: {e}")))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)
            .map_err(|e| Error::store(format!("Failed to write snapshot temp file: {e}")))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::store(format!("Failed to rename snapshot temp file: {e}")))?;

        debug!("Saved {} rows to {:?}", rows.len(), self.path);
        Ok(())
    }

    /// Read and deserialize the snapshot. `None` when no snapshot exists or
    /// the file is unreadable as a whole (soft absence, not an error).
    pub fn load(&self) -> Option<Vec<Row>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {:?}", self.path);
                return None;
            }
            Err(e) => {
                warn!("Failed to read snapshot {:?}: {}", self.path, e);
                return None;
            }
        };

        let entries: Vec<SnapshotEntry> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to parse snapshot {:?}: {}", self.path, e);
                return None;
            }
        };

        Some(entries.into_iter().filter_map(SnapshotEntry::into_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_absent_snapshot_is_none() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_round_trip_preserves_values_and_order() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());

        let mut first = Row::fresh(1);
        first.text = "belajar".to_string();
        first.priority = Priority::Tinggi;
        first.checked = true;
        let rows = vec![first, Row::fresh(3), Row::fresh(2)];

        store.save(&rows).unwrap();
        let restored = store.load().unwrap();
        assert_eq!(restored, rows);
    }

    #[test]
    fn test_wire_format_encodes_ids_as_strings() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());
        store.save(&[Row::fresh(4)]).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"id\": \"4\""));
        assert!(content.contains("\"optionValue\": \"Rendah\""));
    }

    #[test]
    fn test_unrecognized_option_falls_back_to_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        std::fs::write(
            &path,
            r#"[{"id": "1", "text": "x", "optionValue": "Banget", "checked": true}]"#,
        )
        .unwrap();

        let rows = SnapshotStore::at_path(&path).load().unwrap();
        assert_eq!(rows[0].priority, Priority::Rendah);
        assert_eq!(rows[0].text, "x");
        assert!(rows[0].checked);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        std::fs::write(&path, r#"[{"id": "2"}]"#).unwrap();

        let rows = SnapshotStore::at_path(&path).load().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_default_valued());
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_unparsable_id_drops_entry() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        std::fs::write(
            &path,
            r#"[{"id": "abc", "text": "lost"}, {"id": "5", "text": "kept"}]"#,
        )
        .unwrap();

        let rows = SnapshotStore::at_path(&path).load().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 5);
    }

    #[test]
    fn test_garbage_file_is_soft_absence() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        std::fs::write(&path, "not json at all").unwrap();
        assert!(SnapshotStore::at_path(&path).load().is_none());
    }

    #[test]
    fn test_save_overwrites_prior_snapshot() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());
        store.save(&[Row::fresh(1), Row::fresh(2)]).unwrap();
        store.save(&[Row::fresh(1)]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
