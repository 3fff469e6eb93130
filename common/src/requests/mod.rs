//! Wire types for the two report-service endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::pagination::PaginationState;
use crate::model::report::ReportRow;

pub const ACCOUNTS_ENDPOINT: &str = "/api/accounts";
pub const GENERATE_REPORT_ENDPOINT: &str = "/api/generate-report";

/// Body of `POST /api/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsRequest {
    pub password: String,
}

/// Body of `POST /api/generate-report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    pub start_date: String,
    pub end_date: String,
    pub password: String,
    pub selected_account_key: String,
    pub page: u32,
}

/// `{ "error": "..." }` body used by the service (and the forwarder) for failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Successful report payload.
///
/// `raw` keeps the whole decoded JSON document so the renderer can fall back
/// to printing it when neither `html_table` nor `data` is usable.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    pub html_table: Option<String>,
    pub pagination: Option<PaginationState>,
    pub rows: Vec<ReportRow>,
    pub raw: Value,
}

#[derive(Deserialize)]
struct ReportEnvelope {
    #[serde(default)]
    html_table: Option<String>,
    #[serde(default)]
    pagination: Option<PaginationState>,
    #[serde(default)]
    data: Option<Vec<ReportRow>>,
}

impl ReportPayload {
    /// Reads the known fields out of a decoded response document. Fields that
    /// are present but do not match their expected shape are dropped rather
    /// than failing the whole payload.
    pub fn from_value(raw: Value) -> Self {
        let envelope = serde_json::from_value::<ReportEnvelope>(raw.clone()).unwrap_or_else(|_| {
            ReportEnvelope {
                html_table: raw
                    .get("html_table")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                pagination: raw
                    .get("pagination")
                    .and_then(|p| serde_json::from_value(p.clone()).ok()),
                data: None,
            }
        });

        Self {
            html_table: envelope.html_table,
            pagination: envelope.pagination,
            rows: envelope.data.unwrap_or_default(),
            raw,
        }
    }
}
