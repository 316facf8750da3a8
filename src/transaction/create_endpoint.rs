//! Defines the endpoint for appending a new transaction entry.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, JsonOrForm,
    store::CsvStore,
    transaction::{
        DEFAULT_CURRENCY, Transaction, date::normalize_date_time, models::string_or_number,
    },
};

/// The state needed to append a transaction entry.
#[derive(Debug, Clone)]
pub struct AddEntryState {
    /// The CSV file that stores the transaction entries.
    pub csv_store: Arc<Mutex<CsvStore>>,
}

impl FromRef<AppState> for AddEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            csv_store: state.csv_store.clone(),
        }
    }
}

/// The request payload for adding a transaction entry.
///
/// Every field is required and must be non-empty; the handler rejects the
/// request with 400 otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct AddEntryForm {
    /// The date of the transaction, reformatted into the `dateTime` column.
    #[serde(default)]
    pub date: Option<String>,
    /// The amount of money, sent as a string or a bare number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    /// The spending category.
    #[serde(default)]
    pub category: Option<String>,
    /// A short label for the transaction.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form text, stored in the `note` column.
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether the entry is an expense or income.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A route handler that appends one entry to the CSV file.
///
/// The new entry always goes at the end of the file regardless of its date,
/// and gets the fixed default currency.
///
/// # Panics
///
/// Panics if the lock for the CSV store is already held by the same thread.
pub async fn add_entry_endpoint(
    State(state): State<AddEntryState>,
    JsonOrForm(form): JsonOrForm<AddEntryForm>,
) -> impl IntoResponse {
    let (Some(date), Some(amount), Some(category), Some(title), Some(notes), Some(kind)) = (
        non_empty(form.date),
        non_empty(form.amount),
        non_empty(form.category),
        non_empty(form.title),
        non_empty(form.notes),
        non_empty(form.kind),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "All fields are required" })),
        )
            .into_response();
    };

    let entry = Transaction {
        date_time: normalize_date_time(&date),
        amount,
        kind,
        category,
        title,
        currency: DEFAULT_CURRENCY.to_owned(),
        note: notes,
    };

    let store = state.csv_store.lock().unwrap();

    let mut entries = match store.read_all() {
        Ok(entries) => entries,
        Err(error) => return error.into_response(),
    };

    entries.push(entry);

    if let Err(error) = store.write_all(&entries) {
        return error.into_response();
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "Entry added successfully" })),
    )
        .into_response()
}

/// An empty string counts as a missing field.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
