//! Defines the endpoint for listing every transaction entry.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::IntoResponse,
};

use crate::{AppState, store::CsvStore};

/// The state needed to list the transaction entries.
#[derive(Debug, Clone)]
pub struct ListEntriesState {
    /// The CSV file that stores the transaction entries.
    pub csv_store: Arc<Mutex<CsvStore>>,
}

impl FromRef<AppState> for ListEntriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            csv_store: state.csv_store.clone(),
        }
    }
}

/// A route handler that returns every entry in the CSV file as a JSON array,
/// in file order.
///
/// # Panics
///
/// Panics if the lock for the CSV store is already held by the same thread.
pub async fn list_entries_endpoint(State(state): State<ListEntriesState>) -> impl IntoResponse {
    let store = state.csv_store.lock().unwrap();

    match store.read_all() {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::{AppState, CsvStore, build_router, endpoints, transaction::Transaction};

    fn seeded_app(entries: &[Transaction]) -> (TempDir, TestServer) {
        let directory = TempDir::new().expect("Could not create temp directory.");
        let store = CsvStore::new(directory.path().join("transactions.csv"));
        store.write_all(entries).expect("Could not seed CSV file.");

        let server = TestServer::new(build_router(AppState::new(store)));

        (directory, server)
    }

    fn sample_entries() -> Vec<Transaction> {
        vec![
            Transaction {
                date_time: "2024-01-01 10:00:00".to_owned(),
                amount: "10".to_owned(),
                kind: "expense".to_owned(),
                category: "Food".to_owned(),
                title: "Lunch".to_owned(),
                currency: "INR".to_owned(),
                note: "".to_owned(),
            },
            Transaction {
                date_time: "2024-01-02 10:00:00".to_owned(),
                amount: "99".to_owned(),
                kind: "income".to_owned(),
                category: "Other".to_owned(),
                title: "Refund".to_owned(),
                currency: "INR".to_owned(),
                note: "store credit".to_owned(),
            },
        ]
    }

    #[tokio::test]
    async fn returns_every_entry_in_file_order() {
        let (_directory, server) = seeded_app(&sample_entries());

        let response = server.get(endpoints::READ_CSV).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), sample_entries());
    }

    #[tokio::test]
    async fn returns_an_empty_array_for_an_empty_ledger() {
        let (_directory, server) = seeded_app(&[]);

        let response = server.get(endpoints::READ_CSV).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), vec![]);
    }

    #[tokio::test]
    async fn responds_with_500_when_the_file_is_missing() {
        let directory = TempDir::new().expect("Could not create temp directory.");
        let store = CsvStore::new(directory.path().join("does-not-exist.csv"));
        let server = TestServer::new(build_router(AppState::new(store)));

        let response = server.get(endpoints::READ_CSV).await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        assert!(body["error"].is_string(), "got {body}");
    }
}
