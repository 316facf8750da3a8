//! Defines the endpoint for merge-updating a transaction entry.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, JsonOrForm, store::CsvStore, transaction::TransactionPatch};

/// The state needed to update a transaction entry.
#[derive(Debug, Clone)]
pub struct EditEntryState {
    /// The CSV file that stores the transaction entries.
    pub csv_store: Arc<Mutex<CsvStore>>,
}

impl FromRef<AppState> for EditEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            csv_store: state.csv_store.clone(),
        }
    }
}

/// The request payload for updating a transaction entry.
#[derive(Debug, Default, Deserialize)]
pub struct EditEntryForm {
    /// The `dateTime` key of the entry to update.
    #[serde(default, rename = "dateTime")]
    pub date_time: Option<String>,
    /// The fields to overwrite on the matched entry.
    #[serde(default, rename = "updatedEntry")]
    pub updated_entry: TransactionPatch,
}

/// A route handler that shallow-merges the payload over the first entry
/// whose `dateTime` equals the given key, keeping its position in the file.
///
/// Matching is exact string equality. When no entry matches (including when
/// the key is absent from the request), the response is 404 and the file is
/// not rewritten. Entries further down the file with the same key are left
/// alone.
///
/// # Panics
///
/// Panics if the lock for the CSV store is already held by the same thread.
pub async fn edit_entry_endpoint(
    State(state): State<EditEntryState>,
    JsonOrForm(form): JsonOrForm<EditEntryForm>,
) -> impl IntoResponse {
    let store = state.csv_store.lock().unwrap();

    let mut entries = match store.read_all() {
        Ok(entries) => entries,
        Err(error) => return error.into_response(),
    };

    let position = form.date_time.as_deref().and_then(|date_time| {
        entries
            .iter()
            .position(|entry| entry.date_time == date_time)
    });

    let Some(position) = position else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Entry not found" })),
        )
            .into_response();
    };

    form.updated_entry.apply(&mut entries[position]);

    if let Err(error) = store.write_all(&entries) {
        return error.into_response();
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "Entry edited successfully" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use tempfile::TempDir;

    use crate::{AppState, CsvStore, build_router, endpoints, transaction::Transaction};

    fn entry(date_time: &str, title: &str) -> Transaction {
        Transaction {
            date_time: date_time.to_owned(),
            amount: "10".to_owned(),
            kind: "expense".to_owned(),
            category: "Food".to_owned(),
            title: title.to_owned(),
            currency: "INR".to_owned(),
            note: "".to_owned(),
        }
    }

    fn seeded_app(entries: &[Transaction]) -> (TempDir, TestServer, AppState) {
        let directory = TempDir::new().expect("Could not create temp directory.");
        let store = CsvStore::new(directory.path().join("transactions.csv"));
        store.write_all(entries).expect("Could not seed CSV file.");

        let state = AppState::new(store);
        let server =
            TestServer::new(build_router(state.clone()));

        (directory, server, state)
    }

    fn read_entries(state: &AppState) -> Vec<Transaction> {
        state.csv_store.lock().unwrap().read_all().unwrap()
    }

    #[tokio::test]
    async fn merges_fields_and_keeps_position() {
        let seeded = [
            entry("2024-01-01 10:00:00", "Lunch"),
            entry("2024-01-02 10:00:00", "Dinner"),
        ];
        let (_directory, server, state) = seeded_app(&seeded);

        let response = server
            .put(endpoints::EDIT_ENTRY)
            .json(&json!({
                "dateTime": "2024-01-01 10:00:00",
                "updatedEntry": { "amount": "25", "note": "team outing" },
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Entry edited successfully"
        );

        let entries = read_entries(&state);
        assert_eq!(entries[0].amount, "25");
        assert_eq!(entries[0].note, "team outing");
        // Unspecified fields are retained, and the entry stays first.
        assert_eq!(entries[0].title, "Lunch");
        assert_eq!(entries[1], seeded[1]);
    }

    #[tokio::test]
    async fn can_change_the_date_time_key_itself() {
        let (_directory, server, state) = seeded_app(&[entry("2024-01-01 10:00:00", "Lunch")]);

        let response = server
            .put(endpoints::EDIT_ENTRY)
            .json(&json!({
                "dateTime": "2024-01-01 10:00:00",
                "updatedEntry": { "dateTime": "2024-06-06 06:00:00" },
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(read_entries(&state)[0].date_time, "2024-06-06 06:00:00");
    }

    #[tokio::test]
    async fn edits_only_the_first_of_duplicate_keys() {
        let seeded = [
            entry("2024-01-01 10:00:00", "First"),
            entry("2024-01-01 10:00:00", "Second"),
        ];
        let (_directory, server, state) = seeded_app(&seeded);

        server
            .put(endpoints::EDIT_ENTRY)
            .json(&json!({
                "dateTime": "2024-01-01 10:00:00",
                "updatedEntry": { "title": "Edited" },
            }))
            .await
            .assert_status_ok();

        let entries = read_entries(&state);
        assert_eq!(entries[0].title, "Edited");
        assert_eq!(entries[1].title, "Second");
    }

    #[tokio::test]
    async fn responds_with_404_for_an_unknown_key() {
        let seeded = [entry("2024-01-01 10:00:00", "Lunch")];
        let (_directory, server, state) = seeded_app(&seeded);

        let response = server
            .put(endpoints::EDIT_ENTRY)
            .json(&json!({
                "dateTime": "1999-01-01 00:00:00",
                "updatedEntry": { "amount": "25" },
            }))
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Entry not found"
        );
        assert_eq!(read_entries(&state), seeded);
    }

    #[tokio::test]
    async fn responds_with_404_when_the_key_is_absent() {
        let (_directory, server, _state) = seeded_app(&[entry("2024-01-01 10:00:00", "Lunch")]);

        let response = server
            .put(endpoints::EDIT_ENTRY)
            .json(&json!({ "updatedEntry": { "amount": "25" } }))
            .await;

        response.assert_status_not_found();
    }
}
