use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{
        ClusterMember, ClusterMemberListResponse, ClusterResponse, EmptyRequest, EmptyResponse,
        Response, SystemResponse,
    },
    Client, Error,
};

impl Client {
    /// Version and build information of the service.
    pub async fn system_info(&self) -> Result<Response<SystemResponse>, Error> {
        self.get("/system", &[]).await
    }

    // Cluster membership

    pub async fn create_cluster(&self, name: &str) -> Result<Response<ClusterResponse>, Error> {
        self.post(
            "/cluster",
            &[("name".to_string(), Some(name.to_string()))],
            &EmptyRequest {},
        )
        .await
    }

    pub async fn get_cluster(&self) -> Result<Response<ClusterResponse>, Error> {
        self.get("/cluster", &[]).await
    }

    pub async fn delete_cluster(&self) -> Result<Response<EmptyResponse>, Error> {
        self.delete("/cluster", &[]).await
    }

    /// Joins this node to the cluster served at `cluster_url`.
    pub async fn join_cluster(&self, cluster_url: &str) -> Result<Response<ClusterMember>, Error> {
        self.post(
            "/cluster/members",
            &[("cluster_url".to_string(), Some(cluster_url.to_string()))],
            &EmptyRequest {},
        )
        .await
    }

    pub async fn list_cluster_members(
        &self,
        query: &PageQuery,
    ) -> Result<Response<ClusterMemberListResponse>, Error> {
        self.get("/cluster/members", &query.to_params()).await
    }

    pub async fn remove_cluster_member(
        &self,
        member_id: &str,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.delete(
            &format!("/cluster/members/{}", encode_path_segment(member_id)),
            &[],
        )
        .await
    }

    /// Drops cached permission lookups, for one user or for everyone.
    pub async fn invalidate_access_cache(
        &self,
        username: Option<&str>,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.post(
            "/access-cache/invalidate",
            &[("username".to_string(), username.map(str::to_string))],
            &EmptyRequest {},
        )
        .await
    }
}
