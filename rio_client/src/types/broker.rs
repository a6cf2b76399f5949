//! Brokers, the agents attached to them, and the objects they hold.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

// ============================================================================
// Agents
// ============================================================================

/// Backend connector kind of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    BpAgent,
    S3Agent,
    VailAgent,
    #[serde(other)]
    Unknown,
}

/// Connection settings of a BlackPearl agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpAgentConfig {
    pub blackpearl_name: String,
    pub username: String,
    pub bucket: String,
    #[serde(default)]
    pub create_bucket: bool,
}

/// Connection settings of an S3 bucket agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3AgentConfig {
    pub bucket: String,
    pub region: String,
    pub access_id: String,
    pub secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub https: bool,
}

/// Connection settings of a Vail agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VailAgentConfig {
    pub vail_device_name: String,
    pub bucket: String,
    #[serde(default)]
    pub https: bool,
}

/// Typed agent configuration, sent as the bare config object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AgentConfig {
    BlackPearl(BpAgentConfig),
    S3(S3AgentConfig),
    Vail(VailAgentConfig),
}

impl AgentConfig {
    pub fn agent_type(&self) -> AgentType {
        match self {
            AgentConfig::BlackPearl(_) => AgentType::BpAgent,
            AgentConfig::S3(_) => AgentType::S3Agent,
            AgentConfig::Vail(_) => AgentType::VailAgent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub agent_config: AgentConfig,
}

impl AgentCreateRequest {
    pub fn new(name: &str, agent_config: AgentConfig) -> Self {
        Self {
            name: name.to_string(),
            agent_type: agent_config.agent_type(),
            agent_config,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Service side view of the config; secrets are not echoed back.
    #[serde(default)]
    pub agent_config: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub write_agent: bool,
    #[serde(default)]
    pub last_index_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub index_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListResponse {
    pub agents: Vec<AgentResponse>,
    pub page: PageInfo,
}
list_result!(AgentListResponse, agents, AgentResponse);

// ============================================================================
// Brokers
// ============================================================================

/// A broker is created together with its write agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerCreateRequest {
    pub name: String,
    pub agent_name: String,
    pub agent_config: AgentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerResponse {
    pub name: String,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerListResponse {
    pub brokers: Vec<BrokerResponse>,
    pub page: PageInfo,
}
list_result!(BrokerListResponse, brokers, BrokerResponse);

// ============================================================================
// Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectChecksum {
    pub hash: String,
    #[serde(rename = "type")]
    pub checksum_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResponse {
    pub name: String,
    pub broker: String,
    pub size: i64,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub checksum: Option<ObjectChecksum>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Only present when requested with `include_internal_metadata`.
    #[serde(default)]
    pub internal_metadata: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectListResponse {
    pub objects: Vec<ObjectResponse>,
    pub page: PageInfo,
}
list_result!(ObjectListResponse, objects, ObjectResponse);

/// Partial update of an object's user metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectUpdateRequest {
    pub metadata: HashMap<String, String>,
}
