//! Export module for paysplit
//!
//! - JSON: the persisted document (re-importable)
//! - YAML: the same document, human-readable (re-importable)
//! - CSV: the month's expenses with their assigned paycheck

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, import_from_json};
pub use yaml::{export_yaml, import_from_yaml};
