//! Configuration module for paysplit
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PaysplitPaths;
pub use settings::Settings;
