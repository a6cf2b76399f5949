//! Cluster membership and system metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResponse {
    pub cluster_name: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMember {
    pub member_id: String,
    pub ip_address: String,
    pub http_port: u16,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMemberListResponse {
    pub cluster_members: Vec<ClusterMember>,
    pub page: PageInfo,
}
list_result!(ClusterMemberListResponse, cluster_members, ClusterMember);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemResponse {
    pub version: String,
    #[serde(default)]
    pub git_commit_hash: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
}
