//! Spreadsheet-backed current snapshot provider.
//!
//! Reads a published spreadsheet through a JSON endpoint. Two payload shapes
//! are accepted, covering the common sheet-to-JSON bridges:
//!
//! - an object: `{ "GALLON OF GASOLINE": "$3.15", "PRESIDENT": "..." }`
//! - an array of rows: `[{ "Key": "GALLON OF GASOLINE", "Value": "$3.15" }]`
//!
//! Row column names are matched case-insensitively (`key`, `name` or `fact`
//! for the key; `value` or `current` for the value). Numeric cells are
//! rendered with their JSON text. Rows with a blank key or value are skipped.
//!
//! When several spellings map to one known key ("PRESIDENT", "president "),
//! the exact canonical spelling wins. Without one, the first spelling wins:
//! row order for arrays, key order of the parsed object otherwise.

use std::collections::hash_map::Entry;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::FactsError;
use crate::models::{FactKey, FactMap};
use crate::provider::CurrentSnapshotProvider;

const PROVIDER_ID: &str = "SHEET";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const KEY_COLUMNS: &[&str] = &["key", "name", "fact"];
const VALUE_COLUMNS: &[&str] = &["value", "current"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SheetPayload {
    Object(Map<String, Value>),
    Rows(Vec<Map<String, Value>>),
}

/// Current snapshot provider backed by a spreadsheet JSON endpoint.
///
/// # Example
///
/// ```ignore
/// use keepsake_facts::provider::SheetSnapshotProvider;
///
/// let provider = SheetSnapshotProvider::new("https://example.com/sheet.json");
/// ```
pub struct SheetSnapshotProvider {
    client: Client,
    url: String,
}

impl SheetSnapshotProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> Result<String, FactsError> {
        debug!("Sheet snapshot request: {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FactsError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                FactsError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactsError::LiveFetch {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CurrentSnapshotProvider for SheetSnapshotProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_current(&self) -> Result<FactMap, FactsError> {
        let body = self.fetch_body().await?;
        parse_snapshot(&body)
    }
}

/// Parse a sheet payload into a snapshot.
pub fn parse_snapshot(body: &str) -> Result<FactMap, FactsError> {
    let payload: SheetPayload =
        serde_json::from_str(body).map_err(|e| FactsError::LiveFetch {
            provider: PROVIDER_ID.to_string(),
            message: format!("Unrecognized payload: {}", e),
        })?;

    let pairs: Vec<(String, String)> = match payload {
        SheetPayload::Object(cells) => cells
            .into_iter()
            .filter_map(|(key, value)| Some((key, cell_text(&value)?)))
            .collect(),
        SheetPayload::Rows(rows) => rows.iter().filter_map(row_pair).collect(),
    };

    let mut snapshot = FactMap::new();
    for (raw_name, value) in &pairs {
        let (name, value) = (raw_name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            continue;
        }
        let key = FactKey::from(name);
        let canonical = key.as_str() == raw_name.as_str();
        match snapshot.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
            }
            Entry::Occupied(mut slot) if canonical => {
                slot.insert(value.into());
            }
            Entry::Occupied(slot) => {
                debug!(
                    "Sheet snapshot: ignoring duplicate spelling {:?} of {}",
                    raw_name,
                    slot.key()
                );
            }
        }
    }
    Ok(snapshot)
}

fn row_pair(row: &Map<String, Value>) -> Option<(String, String)> {
    let key = column(row, KEY_COLUMNS)?;
    let value = column(row, VALUE_COLUMNS)?;
    Some((key, value))
}

fn column(row: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        row.iter()
            .find(|(column, _)| column.trim().eq_ignore_ascii_case(name))
            .and_then(|(_, value)| cell_text(value))
    })
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
