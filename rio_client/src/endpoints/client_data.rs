use tokio::task::JoinHandle;

use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{ClientDataListResponse, ClientDataRequest, ClientDataResponse, EmptyResponse, Response},
    Client, Error,
};

fn client_data_path(id: &str) -> String {
    format!("/client-data/{}", encode_path_segment(id))
}

impl Client {
    pub async fn insert_client_data(
        &self,
        request: &ClientDataRequest,
    ) -> Result<Response<ClientDataResponse>, Error> {
        self.post("/client-data", &[], request).await
    }

    pub async fn get_client_data(&self, id: &str) -> Result<Response<ClientDataResponse>, Error> {
        self.get(&client_data_path(id), &[]).await
    }

    pub async fn list_client_data(
        &self,
        query: &PageQuery,
    ) -> Result<Response<ClientDataListResponse>, Error> {
        self.get("/client-data", &query.to_params()).await
    }

    pub async fn delete_client_data(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&client_data_path(id), &[]).await
    }

    /// Registers the calling application in the background.
    ///
    /// The task is detached from the caller: dropping the handle does not
    /// cancel it, and a failure is only logged. Must be called from within a
    /// tokio runtime.
    pub fn spawn_register_client(&self, request: ClientDataRequest) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            match client.insert_client_data(&request).await {
                Ok(registered) => tracing::debug!(
                    "Registered client {} {} as {}",
                    request.client_name,
                    request.client_version,
                    registered.id
                ),
                Err(e) => tracing::error!(
                    "Failed to register client {} {}: {}",
                    request.client_name,
                    request.client_version,
                    e
                ),
            }
        })
    }
}
