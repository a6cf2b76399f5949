//! Lifecycle policies: age based rules applied to a broker's objects.

use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Delete,
    Migrate,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRule {
    pub action: LifecycleAction,
    pub after_days: u32,
    /// Destination broker, required for `Migrate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_broker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRequest {
    pub name: String,
    pub broker: String,
    pub rules: Vec<LifecycleRule>,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleResponse {
    pub id: String,
    pub name: String,
    pub broker: String,
    #[serde(default)]
    pub rules: Vec<LifecycleRule>,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleListResponse {
    pub lifecycles: Vec<LifecycleResponse>,
    pub page: PageInfo,
}
list_result!(LifecycleListResponse, lifecycles, LifecycleResponse);
