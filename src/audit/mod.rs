//! Audit logging system for paysplit
//!
//! Records every change to the budget (expense added or removed, income
//! edited, budget imported or reset) with before/after snapshots in an
//! append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use paysplit::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.name.clone()),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
