//! # tugas-core - Core Domain Types
//!
//! Foundation crate for tugas. Provides the row-form domain model, the task
//! model, draft validation, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Row Form (`row`, `allocator`)
//! - [`Row`] - One repeatable unit of the todo form (text, priority, checked)
//! - [`RowLabels`] - Identifier-bearing attributes derived from a row id
//! - [`IdAllocator`] - High-water-mark id allocator for rows
//!
//! ### Tasks (`task`, `validate`)
//! - [`Task`] - A stored task (title, description, deadline, priority, status)
//! - [`TaskDraft`] - String-field form state for the task editor
//! - [`validate()`] - Aggregated draft validation (all violations at once)
//!
//! ### Domain Enums (`types`)
//! - [`Priority`] - Rendah / Sedang / Tinggi
//! - [`Status`] - Belum / Sedang Dikerjakan / Selesai
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tugas_core::prelude::*;
//! ```

pub mod allocator;
pub mod error;
pub mod logging;
pub mod row;
pub mod task;
pub mod types;
pub mod validate;

/// Prelude for common imports used throughout all tugas crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use allocator::IdAllocator;
pub use error::{Error, Result, ResultExt};
pub use row::{Row, RowLabels};
pub use task::{Task, TaskDraft};
pub use types::{Priority, Status};
pub use validate::validate;
