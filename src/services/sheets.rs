use async_trait::async_trait;
use google_sheets4::api::ValueRange;
use google_sheets4::{hyper, hyper_rustls, oauth2, Sheets};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error as ThisError;
use tokio::time::timeout;
use tracing::debug;

use crate::config::Config;
use crate::constants::REMOTE_TIMEOUT;

/// Cell data written as the user typed it (formulas, dates and numbers are
/// parsed by the spreadsheet, matching manual entry)
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Appends insert a fresh row after the last non-empty row of the band
const INSERT_DATA_OPTION: &str = "INSERT_ROWS";

#[derive(ThisError, Debug)]
pub enum SheetsError {
    #[error("credential error: {0}")]
    Credentials(String),

    #[error("Google Sheets API error: {0}")]
    Api(#[from] google_sheets4::Error),

    #[error("Google Sheets call exceeded {} seconds", .0.as_secs())]
    Timeout(Duration),
}

/// Acknowledgement of a successful update or append.
///
/// Only range and counts; safe to echo to HTTP callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteAck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_rows: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_cells: Option<i32>,
}

/// The three values-API operations this service consumes.
///
/// One shared handle serves all in-flight requests; calls are stateless and
/// safe to issue concurrently. Tests substitute a recording mock.
#[async_trait]
pub trait SheetValues: Send + Sync {
    /// Fetch the rows of `range` in row-major order. An empty sheet region
    /// yields an empty vec, not an error.
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError>;

    /// Overwrite `range` with `rows`. Cells beyond the supplied values are
    /// left untouched by the remote API.
    async fn update_values(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<WriteAck, SheetsError>;

    /// Append `rows` after the last non-empty row of the band in `range`.
    async fn append_values(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<WriteAck, SheetsError>;
}

type SheetsHub = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// `SheetValues` backed by the Google Sheets v4 values API.
///
/// Holds the spreadsheet id alongside the hub so handlers only ever name a
/// range. Every call is bounded by `REMOTE_TIMEOUT`; the upstream API has no
/// timeout of its own.
pub struct GoogleSheets {
    hub: SheetsHub,
    spreadsheet_id: String,
}

impl GoogleSheets {
    /// Build the authenticated hub from service-account credentials.
    ///
    /// Fails fast on an unparseable key so a bad deployment never starts
    /// serving.
    pub async fn connect(config: &Config) -> Result<Self, SheetsError> {
        let key: oauth2::ServiceAccountKey = serde_json::from_str(&config.credentials_json)
            .map_err(|e| SheetsError::Credentials(format!("invalid service account key: {}", e)))?;

        let auth = oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| SheetsError::Credentials(e.to_string()))?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .build();

        Ok(Self {
            hub: Sheets::new(hyper::Client::builder().build(connector), auth),
            spreadsheet_id: config.spreadsheet_id.clone(),
        })
    }
}

#[async_trait]
impl SheetValues for GoogleSheets {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        debug!(range, "values.get");
        let call = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .doit();
        let (_, value_range) = timeout(REMOTE_TIMEOUT, call)
            .await
            .map_err(|_| SheetsError::Timeout(REMOTE_TIMEOUT))??;

        Ok(value_range
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    async fn update_values(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<WriteAck, SheetsError> {
        debug!(range, row_count = rows.len(), "values.update");
        let body = ValueRange {
            values: Some(to_cells(rows)),
            ..Default::default()
        };
        let call = self
            .hub
            .spreadsheets()
            .values_update(body, &self.spreadsheet_id, range)
            .value_input_option(VALUE_INPUT_OPTION)
            .doit();
        let (_, ack) = timeout(REMOTE_TIMEOUT, call)
            .await
            .map_err(|_| SheetsError::Timeout(REMOTE_TIMEOUT))??;

        Ok(WriteAck {
            updated_range: ack.updated_range,
            updated_rows: ack.updated_rows,
            updated_cells: ack.updated_cells,
        })
    }

    async fn append_values(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<WriteAck, SheetsError> {
        debug!(range, row_count = rows.len(), "values.append");
        let body = ValueRange {
            values: Some(to_cells(rows)),
            ..Default::default()
        };
        let call = self
            .hub
            .spreadsheets()
            .values_append(body, &self.spreadsheet_id, range)
            .value_input_option(VALUE_INPUT_OPTION)
            .insert_data_option(INSERT_DATA_OPTION)
            .doit();
        let (_, ack) = timeout(REMOTE_TIMEOUT, call)
            .await
            .map_err(|_| SheetsError::Timeout(REMOTE_TIMEOUT))??;

        let updates = ack.updates.unwrap_or_default();
        Ok(WriteAck {
            updated_range: updates.updated_range,
            updated_rows: updates.updated_rows,
            updated_cells: updates.updated_cells,
        })
    }
}

fn to_cells(rows: Vec<Vec<String>>) -> Vec<Vec<serde_json::Value>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(serde_json::Value::String).collect())
        .collect()
}

/// The values API types cells loosely; non-string cells come back as JSON
/// numbers or bools.
fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_cells_pass_through_without_quoting() {
        assert_eq!(cell_to_string(json!("07:30")), "07:30");
        assert_eq!(cell_to_string(json!(120)), "120");
        assert_eq!(cell_to_string(json!(true)), "true");
    }

    #[test]
    fn write_ack_serializes_camel_case_and_drops_absent_fields() {
        let ack = WriteAck {
            updated_range: Some("Vinh!B6:H6".to_string()),
            updated_rows: None,
            updated_cells: Some(7),
        };
        let v = serde_json::to_value(&ack).unwrap();
        assert_eq!(v, json!({ "updatedRange": "Vinh!B6:H6", "updatedCells": 7 }));
    }
}
