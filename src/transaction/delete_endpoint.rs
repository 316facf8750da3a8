//! Defines the endpoint for removing transaction entries.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, JsonOrForm, store::CsvStore};

/// The state needed to remove transaction entries.
#[derive(Debug, Clone)]
pub struct DeleteEntryState {
    /// The CSV file that stores the transaction entries.
    pub csv_store: Arc<Mutex<CsvStore>>,
}

impl FromRef<AppState> for DeleteEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            csv_store: state.csv_store.clone(),
        }
    }
}

/// The request payload for removing transaction entries.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteEntryForm {
    /// The `dateTime` key of the entries to remove.
    #[serde(default, rename = "dateTime")]
    pub date_time: Option<String>,
}

/// A route handler that removes every entry whose `dateTime` equals the
/// given key.
///
/// Unlike edit, which touches the first match only, this removes all
/// matches. The response is 200 whether or not anything matched.
///
/// # Panics
///
/// Panics if the lock for the CSV store is already held by the same thread.
pub async fn delete_entry_endpoint(
    State(state): State<DeleteEntryState>,
    JsonOrForm(form): JsonOrForm<DeleteEntryForm>,
) -> impl IntoResponse {
    // An empty key is treated the same as a missing one.
    let Some(date_time) = form.date_time.filter(|value| !value.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "dateTime field is required" })),
        )
            .into_response();
    };

    let store = state.csv_store.lock().unwrap();

    let mut entries = match store.read_all() {
        Ok(entries) => entries,
        Err(error) => return error.into_response(),
    };

    entries.retain(|entry| entry.date_time != date_time);

    if let Err(error) = store.write_all(&entries) {
        return error.into_response();
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "Entry deleted successfully" })),
    )
        .into_response()
}
