//! The repeating row of the todo form.
//!
//! A [`Row`] bundles the three user-editable values of one form row. Every
//! attribute that encodes the row's identity (checkbox element id, checkbox
//! field name, label target) is derived on demand from the row id by
//! [`RowLabels::for_id`], so the labels can never disagree with the id.

use serde::{Deserialize, Serialize};

use crate::types::Priority;

/// One repeatable unit of the todo form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Unique among mounted rows, never reused within a session.
    pub id: u64,
    pub text: String,
    pub priority: Priority,
    pub checked: bool,
}

impl Row {
    /// Produce a fresh, default-valued row carrying `id`.
    ///
    /// This is the template-clone step: cloning a populated row always yields
    /// a default-valued row, never a copy of its data.
    pub fn fresh(id: u64) -> Self {
        Self {
            id,
            text: String::new(),
            priority: Priority::default(),
            checked: false,
        }
    }

    /// Reset the three value fields to their defaults, keeping the id.
    ///
    /// Used when the last surviving row is "removed": the collection floor
    /// of one row means it is cleared instead of deleted.
    pub fn reset_values(&mut self) {
        self.text.clear();
        self.priority = Priority::default();
        self.checked = false;
    }

    /// Whether all value fields hold their defaults.
    pub fn is_default_valued(&self) -> bool {
        self.text.is_empty() && self.priority == Priority::default() && !self.checked
    }

    /// The identifier-bearing attributes for this row.
    pub fn labels(&self) -> RowLabels {
        RowLabels::for_id(self.id)
    }
}

/// Identifier-bearing attributes of a row, derived from its id.
///
/// The checkbox element id, the checkbox field name, and the label's target
/// reference, matching the names the snapshot format has always carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabels {
    /// Checkbox element id, e.g. `checkboxInput3`.
    pub checkbox_id: String,
    /// Checkbox field name, e.g. `todo_check[3]`.
    pub checkbox_name: String,
    /// The label's target reference; always equals `checkbox_id`.
    pub label_for: String,
}

impl RowLabels {
    /// Derive every identifier-bearing attribute for `id`.
    ///
    /// Pure function: relabeling a row for a new id is just calling this
    /// with the new id.
    pub fn for_id(id: u64) -> Self {
        let checkbox_id = format!("checkboxInput{id}");
        Self {
            checkbox_name: format!("todo_check[{id}]"),
            label_for: checkbox_id.clone(),
            checkbox_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_row_has_default_values() {
        let row = Row::fresh(5);
        assert_eq!(row.id, 5);
        assert_eq!(row.text, "");
        assert_eq!(row.priority, Priority::Rendah);
        assert!(!row.checked);
        assert!(row.is_default_valued());
    }

    #[test]
    fn test_labels_agree_with_id() {
        let row = Row::fresh(12);
        let labels = row.labels();
        assert_eq!(labels.checkbox_id, "checkboxInput12");
        assert_eq!(labels.checkbox_name, "todo_check[12]");
        assert_eq!(labels.label_for, labels.checkbox_id);
    }

    #[test]
    fn test_relabel_is_pure_over_target_id() {
        // Relabeling does not depend on any prior row state.
        assert_eq!(RowLabels::for_id(3), Row::fresh(3).labels());
        assert_ne!(RowLabels::for_id(3), RowLabels::for_id(4));
    }

    #[test]
    fn test_reset_values_keeps_id() {
        let mut row = Row {
            id: 9,
            text: "beli susu".to_string(),
            priority: Priority::Tinggi,
            checked: true,
        };
        row.reset_values();
        assert_eq!(row.id, 9);
        assert!(row.is_default_valued());
    }
}
