use crate::{
    encoding::encode_path_segment,
    query::{ObjectQuery, PageQuery, Query},
    types::{
        AgentCreateRequest, AgentListResponse, AgentResponse, BrokerCreateRequest,
        BrokerListResponse, BrokerResponse, EmptyRequest, EmptyResponse, ObjectListResponse,
        ObjectResponse, ObjectUpdateRequest, Response,
    },
    Client, Error,
};

use super::flag;

fn broker_path(broker: &str) -> String {
    format!("/brokers/{}", encode_path_segment(broker))
}

fn agent_path(broker: &str, agent: &str) -> String {
    format!("{}/agents/{}", broker_path(broker), encode_path_segment(agent))
}

fn object_path(broker: &str, object: &str) -> String {
    format!("{}/objects/{}", broker_path(broker), encode_path_segment(object))
}

impl Client {
    // Brokers

    pub async fn create_broker(
        &self,
        request: &BrokerCreateRequest,
    ) -> Result<Response<BrokerResponse>, Error> {
        self.post("/brokers", &[], request).await
    }

    pub async fn get_broker(&self, broker: &str) -> Result<Response<BrokerResponse>, Error> {
        self.get(&broker_path(broker), &[]).await
    }

    pub async fn list_brokers(
        &self,
        query: &PageQuery,
    ) -> Result<Response<BrokerListResponse>, Error> {
        self.get("/brokers", &query.to_params()).await
    }

    /// Deletes a broker. `force` also removes a broker that still holds objects.
    pub async fn delete_broker(
        &self,
        broker: &str,
        force: bool,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&broker_path(broker), &[flag("force", force)])
            .await
    }

    pub async fn broker_exists(&self, broker: &str) -> Result<bool, Error> {
        self.head(&broker_path(broker)).await
    }

    /// Creates the broker unless it already exists. Returns `true` if it was
    /// created.
    pub async fn ensure_broker_exists(&self, request: &BrokerCreateRequest) -> Result<bool, Error> {
        if self.broker_exists(&request.name).await? {
            return Ok(false);
        }
        tracing::debug!("Creating broker {}", request.name);
        self.create_broker(request).await?;
        Ok(true)
    }

    // Agents

    pub async fn create_agent(
        &self,
        broker: &str,
        request: &AgentCreateRequest,
    ) -> Result<Response<AgentResponse>, Error> {
        self.post(&format!("{}/agents", broker_path(broker)), &[], request)
            .await
    }

    pub async fn get_agent(
        &self,
        broker: &str,
        agent: &str,
    ) -> Result<Response<AgentResponse>, Error> {
        self.get(&agent_path(broker, agent), &[]).await
    }

    pub async fn list_agents(
        &self,
        broker: &str,
        query: &PageQuery,
    ) -> Result<Response<AgentListResponse>, Error> {
        self.get(&format!("{}/agents", broker_path(broker)), &query.to_params())
            .await
    }

    pub async fn delete_agent(
        &self,
        broker: &str,
        agent: &str,
        force: bool,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&agent_path(broker, agent), &[flag("force", force)])
            .await
    }

    pub async fn agent_exists(&self, broker: &str, agent: &str) -> Result<bool, Error> {
        self.head(&agent_path(broker, agent)).await
    }

    pub async fn ensure_agent_exists(
        &self,
        broker: &str,
        request: &AgentCreateRequest,
    ) -> Result<bool, Error> {
        if self.agent_exists(broker, &request.name).await? {
            return Ok(false);
        }
        tracing::debug!("Creating agent {} on broker {}", request.name, broker);
        self.create_agent(broker, request).await?;
        Ok(true)
    }

    /// Starts a re-scan of the agent's backend to rebuild the object index.
    pub async fn index_agent(
        &self,
        broker: &str,
        agent: &str,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.post(
            &format!("{}/index", agent_path(broker, agent)),
            &[],
            &EmptyRequest {},
        )
        .await
    }

    // Objects

    pub async fn get_object(
        &self,
        broker: &str,
        object: &str,
        include_internal_metadata: bool,
    ) -> Result<Response<ObjectResponse>, Error> {
        self.get(
            &object_path(broker, object),
            &[flag("internal_metadata", include_internal_metadata)],
        )
        .await
    }

    pub async fn list_objects(
        &self,
        broker: &str,
        query: &ObjectQuery,
    ) -> Result<Response<ObjectListResponse>, Error> {
        self.get(&format!("{}/objects", broker_path(broker)), &query.to_params())
            .await
    }

    pub async fn object_exists(&self, broker: &str, object: &str) -> Result<bool, Error> {
        self.head(&object_path(broker, object)).await
    }

    /// Merges `request.metadata` into the object's metadata. Returns `false`
    /// if the object does not exist.
    pub async fn update_object_metadata(
        &self,
        broker: &str,
        object: &str,
        request: &ObjectUpdateRequest,
    ) -> Result<bool, Error> {
        self.patch(&object_path(broker, object), request).await
    }

    pub async fn delete_object(
        &self,
        broker: &str,
        object: &str,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&object_path(broker, object), &[]).await
    }
}
