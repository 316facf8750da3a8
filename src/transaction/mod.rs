//! Transaction entries and the HTTP endpoints that operate on them.
//!
//! This module contains everything related to transaction entries:
//! - The `Transaction` record and the `TransactionPatch` used for edits
//! - Date normalization for the `dateTime` column
//! - One endpoint module per route

mod create_endpoint;
mod date;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod models;

pub use create_endpoint::add_entry_endpoint;
pub use delete_endpoint::delete_entry_endpoint;
pub use edit_endpoint::edit_entry_endpoint;
pub use list_endpoint::list_entries_endpoint;
pub use models::{DEFAULT_CURRENCY, Transaction, TransactionPatch};
