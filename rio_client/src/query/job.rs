use crate::types::{JobStatus, JobType};

use super::{common::QueryCommon, Query};

/// Filters for the job list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub common: QueryCommon,
    pub broker: Option<String>,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
}

impl Query for JobQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> Vec<(String, Option<String>)> {
        let mut params = self.common.to_params();
        params.push(("broker".to_string(), self.broker.clone()));
        params.push((
            "status".to_string(),
            self.status.map(|s| s.as_str().to_string()),
        ));
        params.push((
            "job_type".to_string(),
            self.job_type.map(|t| t.as_str().to_string()),
        ));
        params
    }
}

impl JobQuery {
    pub fn with_broker(mut self, broker: &str) -> Self {
        self.broker = Some(broker.to_string());
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }
}
