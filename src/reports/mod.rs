//! Client for the remote reports service.
//!
//! The service exposes a single read endpoint. Its body is either a bare
//! array of reports or an object with a `reports` array; anything else
//! decodes to an empty list.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::issue::Report;

/// Reports client errors
#[derive(Debug, Error)]
pub enum ReportsError {
    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not JSON
    #[error("invalid JSON body: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ReportsClient {
    client: Client,
    url: String,
}

impl ReportsClient {
    pub fn new(config: &AppConfig) -> Result<Self, ReportsError> {
        let client = Client::builder()
            .timeout(config.reports_timeout)
            .build()
            .map_err(ReportsError::Client)?;
        Ok(ReportsClient {
            client,
            url: config.reports_api_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET` the reports endpoint and decode whatever shape it returns.
    pub async fn fetch(&self) -> Result<Vec<Report>, ReportsError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ReportsError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportsError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(ReportsError::Body)?;
        Ok(decode_reports(body))
    }
}

/// Extract report records from either accepted body shape.
/// Records that fail to decode are skipped.
pub fn decode_reports(body: Value) -> Vec<Report> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("reports") {
            Some(Value::Array(items)) => items,
            _ => {
                log::warn!("Reports body has no `reports` array, treating as empty");
                return Vec::new();
            }
        },
        other => {
            log::warn!("Unexpected reports body type ({}), treating as empty", json_kind(&other));
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Report>(item) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Skipping report #{idx}: {e}");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
