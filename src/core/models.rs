use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Data summarized successfully";

/// Everything computed for one page, stored and returned as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub summary: String,
    pub date_refreshed: String,
    pub internal_urls: Vec<String>,
    pub external_urls: Vec<String>,
}

impl SummaryRecord {
    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn new(summary: String, internal_urls: Vec<String>, external_urls: Vec<String>) -> Self {
        Self {
            summary,
            date_refreshed: now_iso8601(),
            internal_urls,
            external_urls,
        }
    }
}

/// UTC timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
#[must_use]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub force_refresh: bool,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub message: String,
    pub data: SummaryRecord,
}

impl From<SummaryRecord> for SummarizeResponse {
    fn from(data: SummaryRecord) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}
