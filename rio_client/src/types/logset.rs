//! Log sets: diagnostic bundles collected by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsetResponse {
    pub id: String,
    pub status: String,
    pub creation_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsetListResponse {
    pub logs: Vec<LogsetResponse>,
    pub page: PageInfo,
}
list_result!(LogsetListResponse, logs, LogsetResponse);
