//! The stored task and the editor's draft form state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Priority, Status};
use crate::validate::validate;

/// Date format used by the deadline field, matching the stored form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub status: Status,
}

/// String-field form state for the task editor.
///
/// Fields hold whatever the user typed; selector fields hold the selected
/// value's display string. Nothing is parsed or rejected until submit, when
/// [`validate`] reports every violation at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub priority: String,
    pub status: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            deadline: String::new(),
            priority: Priority::default().to_string(),
            status: Status::default().to_string(),
        }
    }
}

impl TaskDraft {
    /// Prefill a draft from an existing task for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.format(DATE_FORMAT).to_string(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
        }
    }

    /// Validate and build a [`Task`] with the given id.
    ///
    /// Returns the full list of violated rules on failure; never a partial
    /// task.
    pub fn build(&self, id: u64) -> std::result::Result<Task, Vec<String>> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        // Safe after validation: every parse below was checked.
        Ok(Task {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            deadline: NaiveDate::parse_from_str(self.deadline.trim(), DATE_FORMAT)
                .expect("validated deadline"),
            priority: self.priority.parse().expect("validated priority"),
            status: self.status.parse().expect("validated status"),
        })
    }
}
