//! The row collection controller.
//!
//! [`TodoForm`] owns the ordered row collection, the id allocator, and the
//! snapshot store. Every mutating method persists the full collection
//! synchronously before returning, so the durable snapshot never lags the
//! in-memory state.
//!
//! Invariants:
//! - the collection holds at least one row at all times;
//! - no two rows share an id, and ids are never reused within a session.

use tugas_core::prelude::*;
use tugas_core::{IdAllocator, Priority, Row};

use crate::snapshot::SnapshotStore;

/// Ordered row collection plus allocator and persistence.
#[derive(Debug)]
pub struct TodoForm {
    rows: Vec<Row>,
    allocator: IdAllocator,
    store: SnapshotStore,
}

impl TodoForm {
    /// Restore from the store's snapshot, or start with the single template
    /// row (id 1) when no usable snapshot exists.
    ///
    /// All restored rows are materialized uniformly: a fresh row per entry
    /// with the stored values written over the defaults. The allocator is
    /// reseeded from the maximum restored id.
    pub fn load(store: SnapshotStore) -> Self {
        let rows = match store.load() {
            Some(rows) if !rows.is_empty() => rows,
            _ => vec![Row::fresh(1)],
        };

        let mut allocator = IdAllocator::new();
        for row in &rows {
            allocator.observe(row.id);
        }

        info!(
            "Loaded todo form: {} rows, high-water id {}",
            rows.len(),
            allocator.high_water()
        );
        Self {
            rows,
            allocator,
            store,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        // The one-row floor makes this always false; kept for the len/is_empty pair.
        self.rows.is_empty()
    }

    /// Position of a row in display order.
    pub fn position(&self, row_id: u64) -> Option<usize> {
        self.rows.iter().position(|r| r.id == row_id)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.rows)
    }

    /// Insert a fresh row immediately after `after_id` and persist.
    ///
    /// Returns the new row's id. An unknown `after_id` appends at the end
    /// rather than failing; adding a row always succeeds.
    pub fn add_row_after(&mut self, after_id: u64) -> Result<u64> {
        let index = match self.position(after_id) {
            Some(index) => index,
            None => {
                warn!("add_row_after: unknown row id {}, appending", after_id);
                self.rows.len() - 1
            }
        };

        let new_id = self.allocator.next();
        self.rows.insert(index + 1, Row::fresh(new_id));
        self.persist()?;
        debug!("Added row {} after row {}", new_id, after_id);
        Ok(new_id)
    }

    /// Remove a row and persist.
    ///
    /// The collection never drops below one row: removing the last surviving
    /// row clears its values in place instead of deleting it.
    pub fn remove_row(&mut self, row_id: u64) -> Result<()> {
        if self.rows.len() > 1 {
            let Some(index) = self.position(row_id) else {
                warn!("remove_row: unknown row id {}", row_id);
                return Ok(());
            };
            self.rows.remove(index);
            debug!("Removed row {}", row_id);
        } else {
            self.rows[0].reset_values();
            debug!("Cleared last surviving row {}", self.rows[0].id);
        }
        self.persist()
    }

    /// Replace a row's text and persist.
    pub fn set_text(&mut self, row_id: u64, text: String) -> Result<()> {
        if let Some(row) = self.row_mut(row_id) {
            row.text = text;
            self.persist()?;
        }
        Ok(())
    }

    /// Set a row's priority and persist.
    pub fn set_priority(&mut self, row_id: u64, priority: Priority) -> Result<()> {
        if let Some(row) = self.row_mut(row_id) {
            row.priority = priority;
            self.persist()?;
        }
        Ok(())
    }

    /// Flip a row's checkbox and persist.
    pub fn toggle_checked(&mut self, row_id: u64) -> Result<()> {
        if let Some(row) = self.row_mut(row_id) {
            row.checked = !row.checked;
            self.persist()?;
        }
        Ok(())
    }

    pub fn row(&self, row_id: u64) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    fn row_mut(&mut self, row_id: u64) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fresh_form(temp: &tempfile::TempDir) -> TodoForm {
        TodoForm::load(SnapshotStore::new(temp.path()))
    }

    #[test]
    fn test_load_without_snapshot_starts_with_template_row() {
        let temp = tempdir().unwrap();
        let form = fresh_form(&temp);
        assert_eq!(form.rows(), &[Row::fresh(1)]);
    }

    #[test]
    fn test_add_row_inserts_after_origin() {
        let temp = tempdir().unwrap();
        let mut form = fresh_form(&temp);
        form.set_text(1, "a".to_string()).unwrap();

        let new_id = form.add_row_after(1).unwrap();
        assert_eq!(new_id, 2);
        assert_eq!(form.rows()[0].text, "a");
        assert_eq!(form.rows()[1], Row::fresh(2));
    }

    #[test]
    fn test_new_row_goes_between_origin_and_successor() {
        let temp = tempdir().unwrap();
        let mut form = fresh_form(&temp);
        let second = form.add_row_after(1).unwrap();
        let third = form.add_row_after(1).unwrap();

        let ids: Vec<u64> = form.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, third, second]);
    }

    #[test]
    fn test_removed_ids_are_never_reissued() {
        let temp = tempdir().unwrap();
        let mut form = fresh_form(&temp);
        let second = form.add_row_after(1).unwrap();
        form.remove_row(second).unwrap();
        let third = form.add_row_after(1).unwrap();
        assert!(third > second);
    }

    #[test]
    fn test_remove_last_row_clears_instead_of_deleting() {
        let temp = tempdir().unwrap();
        let mut form = fresh_form(&temp);
        form.set_text(1, "sisa".to_string()).unwrap();
        form.toggle_checked(1).unwrap();

        form.remove_row(1).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form.rows()[0].id, 1);
        assert!(form.rows()[0].is_default_valued());
    }

    #[test]
    fn test_collection_never_drops_below_one_row() {
        let temp = tempdir().unwrap();
        let mut form = fresh_form(&temp);
        for _ in 0..3 {
            let id = form.rows().last().unwrap().id;
            form.add_row_after(id).unwrap();
        }
        for _ in 0..10 {
            let id = form.rows()[0].id;
            form.remove_row(id).unwrap();
            assert!(form.len() >= 1);
        }
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());
        let mut form = TodoForm::load(store.clone());

        form.set_text(1, "tersimpan".to_string()).unwrap();
        assert_eq!(store.load().unwrap()[0].text, "tersimpan");

        form.add_row_after(1).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);

        form.toggle_checked(1).unwrap();
        assert!(store.load().unwrap()[0].checked);
    }

    #[test]
    fn test_reload_restores_rows_and_reseeds_allocator() {
        let temp = tempdir().unwrap();
        {
            let mut form = fresh_form(&temp);
            form.add_row_after(1).unwrap();
            form.set_text(2, "lanjut".to_string()).unwrap();
        }

        let mut form = fresh_form(&temp);
        assert_eq!(form.len(), 2);
        assert_eq!(form.row(2).unwrap().text, "lanjut");
        // Next issued id must exceed every restored id.
        assert_eq!(form.add_row_after(1).unwrap(), 3);
    }

    #[test]
    fn test_restore_single_entry_seeds_next_id_two() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(crate::snapshot::SNAPSHOT_FILENAME);
        std::fs::write(
            &path,
            r#"[{"id": "1", "text": "x", "optionValue": "Sedang", "checked": true}]"#,
        )
        .unwrap();

        let mut form = TodoForm::load(SnapshotStore::at_path(&path));
        let row = &form.rows()[0];
        assert_eq!(row.text, "x");
        assert_eq!(row.priority, Priority::Sedang);
        assert!(row.checked);
        assert_eq!(form.add_row_after(1).unwrap(), 2);
    }

    #[test]
    fn test_empty_snapshot_array_keeps_floor() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(crate::snapshot::SNAPSHOT_FILENAME);
        std::fs::write(&path, "[]").unwrap();

        let form = TodoForm::load(SnapshotStore::at_path(&path));
        assert_eq!(form.rows(), &[Row::fresh(1)]);
    }

    #[test]
    fn test_cycle_priority_persists() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::new(temp.path());
        let mut form = TodoForm::load(store.clone());

        form.set_priority(1, Priority::Tinggi).unwrap();
        assert_eq!(store.load().unwrap()[0].priority, Priority::Tinggi);
    }
}
