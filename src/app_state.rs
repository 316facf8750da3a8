//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::store::CsvStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The CSV file that stores the transaction entries.
    ///
    /// The mutex serializes the read-modify-write cycle of mutating
    /// requests.
    pub csv_store: Arc<Mutex<CsvStore>>,
}

impl AppState {
    /// Create a new [AppState] backed by `csv_store`.
    pub fn new(csv_store: CsvStore) -> Self {
        Self {
            csv_store: Arc::new(Mutex::new(csv_store)),
        }
    }
}
