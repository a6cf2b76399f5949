use crate::{
    encoding::encode_path_segment,
    query::{JobQuery, PageQuery, Query},
    types::{
        ArchiveRequest, EmptyRequest, EmptyResponse, FileStatusListResponse, JobListResponse,
        JobRequest, JobResponse, RestoreRequest, Response,
    },
    Client, Error,
};

fn job_path(id: &str) -> String {
    format!("/jobs/{}", encode_path_segment(id))
}

impl Client {
    /// Submits an archive or restore job to a broker.
    pub async fn submit_job(
        &self,
        broker: &str,
        request: JobRequest<'_>,
    ) -> Result<Response<JobResponse>, Error> {
        let path = format!(
            "/brokers/{}/{}",
            encode_path_segment(broker),
            request.path_segment()
        );
        self.post(&path, &[], &request).await
    }

    pub async fn archive(
        &self,
        broker: &str,
        request: &ArchiveRequest,
    ) -> Result<Response<JobResponse>, Error> {
        self.submit_job(broker, JobRequest::Archive(request)).await
    }

    pub async fn restore(
        &self,
        broker: &str,
        request: &RestoreRequest,
    ) -> Result<Response<JobResponse>, Error> {
        self.submit_job(broker, JobRequest::Restore(request)).await
    }

    pub async fn get_job(&self, id: &str) -> Result<Response<JobResponse>, Error> {
        self.get(&job_path(id), &[]).await
    }

    pub async fn list_jobs(&self, query: &JobQuery) -> Result<Response<JobListResponse>, Error> {
        self.get("/jobs", &query.to_params()).await
    }

    pub async fn job_exists(&self, id: &str) -> Result<bool, Error> {
        self.head(&job_path(id)).await
    }

    /// Per-file progress of a job.
    pub async fn job_file_status(
        &self,
        id: &str,
        query: &PageQuery,
    ) -> Result<Response<FileStatusListResponse>, Error> {
        self.get(&format!("{}/filestatus", job_path(id)), &query.to_params())
            .await
    }

    pub async fn cancel_job(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.put(&format!("{}/cancel", job_path(id)), &EmptyRequest {})
            .await
    }

    pub async fn delete_job(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&job_path(id), &[]).await
    }
}
