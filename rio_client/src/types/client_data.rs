//! Client data records: small key/value documents stored by client
//! applications, including their self-registration.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDataRequest {
    pub client_name: String,
    pub client_version: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl ClientDataRequest {
    pub fn new(client_name: &str, client_version: &str) -> Self {
        Self {
            client_name: client_name.to_string(),
            client_version: client_version.to_string(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDataResponse {
    pub id: String,
    pub client_name: String,
    pub client_version: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDataListResponse {
    pub result: Vec<ClientDataResponse>,
    pub page: PageInfo,
}
list_result!(ClientDataListResponse, result, ClientDataResponse);
