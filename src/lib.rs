//! paysplit - split monthly bills between two paychecks
//!
//! Each recurring expense has a nominal due day. Given the two paydays of a
//! month, every expense is assigned to the paycheck that pays it, and each
//! paycheck's income, expenses and remainder are totalled.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, income, money, paycheck assignment)
//! - `storage`: Key-value persistence of the budget document
//! - `services`: Write-through budget operations
//! - `reports`: Paycheck summary and month calendar
//! - `audit`: Audit logging system
//! - `backup`: Snapshots before destructive operations
//! - `export`: JSON, YAML and CSV export
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use paysplit::models::ViewMonth;
//! use paysplit::reports::PaycheckSummary;
//! use paysplit::services::BudgetService;
//! use paysplit::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let service = BudgetService::new(&storage);
//! let summary = PaycheckSummary::generate(service.state(), &ViewMonth::current());
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaysplitError, PaysplitResult};
