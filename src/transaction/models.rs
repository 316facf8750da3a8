//! The transaction record and the partial record used for merge-updates.

use serde::{Deserialize, Deserializer, Serialize};

/// The currency assigned to entries created through the API.
pub const DEFAULT_CURRENCY: &str = "INR";

/// One row of the CSV file: a single financial transaction.
///
/// All values are kept as text, exactly as stored in the file. The field
/// order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// When the transaction happened, in the format `YYYY-MM-DD HH:mm:ss`.
    ///
    /// This doubles as the lookup key for edit and delete. Nothing prevents
    /// duplicate values; edit acts on the first match only while delete
    /// removes every match.
    pub date_time: String,
    /// The amount of money spent or earned.
    pub amount: String,
    /// Whether the entry is an expense or income.
    #[serde(rename = "type")]
    pub kind: String,
    /// The spending category, e.g. groceries.
    pub category: String,
    /// A short label for the transaction.
    pub title: String,
    /// The three-letter currency code.
    pub currency: String,
    /// Free-form text attached to the transaction.
    pub note: String,
}

/// A partial transaction record: the `updatedEntry` payload of an edit
/// request.
///
/// Fields that are present overwrite the matched record; absent fields are
/// retained. The key field `dateTime` itself may be overwritten.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    /// Replaces the entry's `dateTime` when present.
    #[serde(default)]
    pub date_time: Option<String>,
    /// Replaces the entry's `amount` when present.
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    /// Replaces the entry's `type` when present.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Replaces the entry's `category` when present.
    #[serde(default)]
    pub category: Option<String>,
    /// Replaces the entry's `title` when present.
    #[serde(default)]
    pub title: Option<String>,
    /// Replaces the entry's `currency` when present.
    #[serde(default)]
    pub currency: Option<String>,
    /// Replaces the entry's `note` when present.
    #[serde(default)]
    pub note: Option<String>,
}

impl TransactionPatch {
    /// Shallow-merge this patch over `entry`: every field the patch carries
    /// overwrites the corresponding field of `entry` in place.
    pub fn apply(&self, entry: &mut Transaction) {
        if let Some(date_time) = &self.date_time {
            entry.date_time = date_time.clone();
        }
        if let Some(amount) = &self.amount {
            entry.amount = amount.clone();
        }
        if let Some(kind) = &self.kind {
            entry.kind = kind.clone();
        }
        if let Some(category) = &self.category {
            entry.category = category.clone();
        }
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(currency) = &self.currency {
            entry.currency = currency.clone();
        }
        if let Some(note) = &self.note {
            entry.note = note.clone();
        }
    }
}

/// Deserializes an amount that JSON clients may send as either a string or a
/// bare number, keeping its text form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;

    Ok(raw.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}
