use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{EmptyResponse, LifecycleListResponse, LifecycleRequest, LifecycleResponse, Response},
    Client, Error,
};

fn lifecycle_path(id: &str) -> String {
    format!("/lifecycles/{}", encode_path_segment(id))
}

impl Client {
    pub async fn create_lifecycle(
        &self,
        request: &LifecycleRequest,
    ) -> Result<Response<LifecycleResponse>, Error> {
        self.post("/lifecycles", &[], request).await
    }

    pub async fn get_lifecycle(&self, id: &str) -> Result<Response<LifecycleResponse>, Error> {
        self.get(&lifecycle_path(id), &[]).await
    }

    pub async fn list_lifecycles(
        &self,
        query: &PageQuery,
    ) -> Result<Response<LifecycleListResponse>, Error> {
        self.get("/lifecycles", &query.to_params()).await
    }

    pub async fn update_lifecycle(
        &self,
        id: &str,
        request: &LifecycleRequest,
    ) -> Result<Response<LifecycleResponse>, Error> {
        self.put(&lifecycle_path(id), request).await
    }

    pub async fn delete_lifecycle(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&lifecycle_path(id), &[]).await
    }
}
