use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{EmptyRequest, EmptyResponse, LogsetListResponse, LogsetResponse, Response},
    Client, Error,
};

fn logset_path(id: &str) -> String {
    format!("/logs/{}", encode_path_segment(id))
}

impl Client {
    /// Starts collecting a new log set. The returned set is usually still
    /// in progress.
    pub async fn create_logset(&self) -> Result<Response<LogsetResponse>, Error> {
        self.post("/logs/new", &[], &EmptyRequest {}).await
    }

    pub async fn get_logset(&self, id: &str) -> Result<Response<LogsetResponse>, Error> {
        self.get(&logset_path(id), &[]).await
    }

    pub async fn list_logsets(
        &self,
        query: &PageQuery,
    ) -> Result<Response<LogsetListResponse>, Error> {
        self.get("/logs", &query.to_params()).await
    }

    pub async fn logset_exists(&self, id: &str) -> Result<bool, Error> {
        self.head(&logset_path(id)).await
    }

    pub async fn delete_logset(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&logset_path(id), &[]).await
    }
}
