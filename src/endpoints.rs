//! The API endpoint URIs.

/// The liveness route.
pub const ROOT: &str = "/";
/// The route for listing every transaction entry.
pub const READ_CSV: &str = "/read-csv";
/// The route for appending a new transaction entry.
pub const ADD_ENTRY: &str = "/add-entry";
/// The route for updating an existing transaction entry.
pub const EDIT_ENTRY: &str = "/edit-entry";
/// The route for removing transaction entries.
pub const DELETE_ENTRY: &str = "/delete-entry";
