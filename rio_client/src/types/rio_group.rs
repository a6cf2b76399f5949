//! Rio groups: named sets of users sharing broker permissions.

use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RioGroupRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub brokers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RioGroupResponse {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub brokers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RioGroupListResponse {
    pub groups: Vec<RioGroupResponse>,
    pub page: PageInfo,
}
list_result!(RioGroupListResponse, groups, RioGroupResponse);
