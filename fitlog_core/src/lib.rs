#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fitlog tracker.
//!
//! This crate provides:
//! - Domain types (workout days, exercise entries, meal days, items)
//! - The built-in exercise catalog and category badges
//! - The data store and its append/merge/delete operations
//! - Derived daily totals and summaries
//! - Backup export/import
//! - Persistence (single JSON store document)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod store;
pub mod totals;
pub mod backup;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Category};
pub use config::Config;
pub use persistence::{JsonFileBackend, MemoryBackend, StoreBackend};
pub use store::DataStore;
pub use totals::{daily_totals, day_macro_totals, store_summary, MacroTotals, StoreSummary};
pub use backup::{backup_file_name, export_to_string, parse_backup, BackupDocument};
