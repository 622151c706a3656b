//! Service layer for paysplit
//!
//! Services hold the session's budget and apply every change to storage and
//! the audit log as it happens.

pub mod budget;

pub use budget::BudgetService;
