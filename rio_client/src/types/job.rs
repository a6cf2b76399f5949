//! Archive and restore jobs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

/// Kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Archive,
    Restore,
    #[serde(other)]
    Unknown,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Archive => "ARCHIVE",
            JobType::Restore => "RESTORE",
            JobType::Unknown => "UNKNOWN",
        }
    }
}

/// Lifecycle state of a job or of one file in a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Active,
    Completed,
    Canceled,
    Error,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "ACTIVE",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Error => "ERROR",
            JobStatus::Unknown => "UNKNOWN",
        }
    }

    /// `true` once the job can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Canceled | JobStatus::Error
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveFile {
    pub name: String,
    pub uri: String,
    pub size: i64,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub files: Vec<ArchiveFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteRange {
    pub start_byte: i64,
    pub end_byte: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreFile {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_range: Option<ByteRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub files: Vec<RestoreFile>,
}

/// Any job submission. The `@type` tag picks the broker sub-path and is
/// stripped from the body.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "@type", rename_all = "lowercase")]
pub enum JobRequest<'a> {
    Archive(&'a ArchiveRequest),
    Restore(&'a RestoreRequest),
}

impl JobRequest<'_> {
    pub fn job_type(&self) -> JobType {
        match self {
            JobRequest::Archive(_) => JobType::Archive,
            JobRequest::Restore(_) => JobType::Restore,
        }
    }

    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            JobRequest::Archive(_) => "archive",
            JobRequest::Restore(_) => "restore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusDetail {
    pub message: String,
    pub status: JobStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub job_type: JobType,
    pub status: JobStatusDetail,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub number_of_files: i64,
    #[serde(default)]
    pub files_transferred: i64,
    #[serde(default)]
    pub total_size_in_bytes: i64,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub page: PageInfo,
}
list_result!(JobListResponse, jobs, JobResponse);

/// Progress of a single file inside a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    pub name: String,
    pub status: JobStatus,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub size_in_bytes: Option<i64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatusListResponse {
    pub file_status: Vec<FileStatus>,
    pub page: PageInfo,
}
list_result!(FileStatusListResponse, file_status, FileStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_body;

    #[test]
    fn job_request_strips_tag() {
        let restore = RestoreRequest {
            name: None,
            files: vec![RestoreFile {
                name: "obj".to_string(),
                uri: "file:///tmp/obj".to_string(),
                byte_range: Some(ByteRange {
                    start_byte: 0,
                    end_byte: 9,
                }),
            }],
        };
        let request = JobRequest::Restore(&restore);
        assert_eq!(request.job_type(), JobType::Restore);
        assert_eq!(request.path_segment(), "restore");

        let wire = encode_body(&request).unwrap();
        assert!(wire.get("@type").is_none());
        assert_eq!(wire["files"][0]["byteRange"]["endByte"], 9);
        assert!(wire.get("name").is_none());
    }

    #[test]
    fn job_status_finality() {
        assert!(JobStatus::Completed.is_final());
        assert!(JobStatus::Error.is_final());
        assert!(!JobStatus::Active.is_final());
        let status: JobStatus = serde_json::from_str(r#""PAUSED""#).unwrap();
        assert_eq!(status, JobStatus::Unknown);
    }
}
