//! Draft validation.
//!
//! Submission is all-or-nothing: every violated rule is reported in one
//! aggregated list, and a draft with any violation never reaches the store.

use chrono::NaiveDate;

use crate::task::{TaskDraft, DATE_FORMAT};
use crate::types::{Priority, Status};

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// Validate a draft, returning every violated rule. Empty means submittable.
pub fn validate(draft: &TaskDraft) -> Vec<String> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push("Title is required.".to_string());
    }
    if title.chars().count() > TITLE_MAX {
        errors.push(format!("Title must be at most {TITLE_MAX} characters."));
    }

    if draft.description.trim().chars().count() > DESCRIPTION_MAX {
        errors.push(format!(
            "Description must be at most {DESCRIPTION_MAX} characters."
        ));
    }

    if NaiveDate::parse_from_str(draft.deadline.trim(), DATE_FORMAT).is_err() {
        errors.push("Deadline must be a valid date (YYYY-MM-DD).".to_string());
    }

    if draft.priority.parse::<Priority>().is_err() {
        errors.push("Priority is not valid.".to_string());
    }

    if draft.status.parse::<Status>().is_err() {
        errors.push("Status is not valid.".to_string());
    }

    errors
}
