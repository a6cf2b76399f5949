use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{EmptyResponse, Response, RioGroupListResponse, RioGroupRequest, RioGroupResponse},
    Client, Error,
};

fn rio_group_path(name: &str) -> String {
    format!("/rio-groups/{}", encode_path_segment(name))
}

impl Client {
    pub async fn create_rio_group(
        &self,
        request: &RioGroupRequest,
    ) -> Result<Response<RioGroupResponse>, Error> {
        self.post("/rio-groups", &[], request).await
    }

    pub async fn get_rio_group(&self, name: &str) -> Result<Response<RioGroupResponse>, Error> {
        self.get(&rio_group_path(name), &[]).await
    }

    pub async fn list_rio_groups(
        &self,
        query: &PageQuery,
    ) -> Result<Response<RioGroupListResponse>, Error> {
        self.get("/rio-groups", &query.to_params()).await
    }

    pub async fn update_rio_group(
        &self,
        name: &str,
        request: &RioGroupRequest,
    ) -> Result<Response<RioGroupResponse>, Error> {
        self.put(&rio_group_path(name), request).await
    }

    pub async fn delete_rio_group(&self, name: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&rio_group_path(name), &[]).await
    }

    pub async fn rio_group_exists(&self, name: &str) -> Result<bool, Error> {
        self.head(&rio_group_path(name)).await
    }

    pub async fn ensure_rio_group_exists(&self, request: &RioGroupRequest) -> Result<bool, Error> {
        if self.rio_group_exists(&request.name).await? {
            return Ok(false);
        }
        tracing::debug!("Creating rio group {}", request.name);
        self.create_rio_group(request).await?;
        Ok(true)
    }
}
