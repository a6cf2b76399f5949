use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{
        EmptyResponse, Response, TokenCreateRequest, TokenCreateResponse, TokenKeyResponse,
        TokenListResponse, UserCreateRequest, UserListResponse, UserResponse, UserUpdateRequest,
    },
    Client, Error,
};

fn user_path(username: &str) -> String {
    format!("/users/{}", encode_path_segment(username))
}

fn api_key_path(id: &str) -> String {
    format!("/keys/{}", encode_path_segment(id))
}

impl Client {
    // Users

    pub async fn create_user(
        &self,
        request: &UserCreateRequest,
    ) -> Result<Response<UserResponse>, Error> {
        self.post("/users", &[], request).await
    }

    pub async fn get_user(&self, username: &str) -> Result<Response<UserResponse>, Error> {
        self.get(&user_path(username), &[]).await
    }

    pub async fn list_users(&self, query: &PageQuery) -> Result<Response<UserListResponse>, Error> {
        self.get("/users", &query.to_params()).await
    }

    pub async fn user_exists(&self, username: &str) -> Result<bool, Error> {
        self.head(&user_path(username)).await
    }

    /// Applies the set fields of `request`. Returns `false` for an unknown user.
    pub async fn update_user(
        &self,
        username: &str,
        request: &UserUpdateRequest,
    ) -> Result<bool, Error> {
        self.patch(&user_path(username), request).await
    }

    pub async fn delete_user(&self, username: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&user_path(username), &[]).await
    }

    // Long-lived API keys

    pub async fn create_api_key(
        &self,
        request: &TokenCreateRequest,
    ) -> Result<Response<TokenCreateResponse>, Error> {
        self.post("/keys", &[], request).await
    }

    pub async fn get_api_key(&self, id: &str) -> Result<Response<TokenKeyResponse>, Error> {
        self.get(&api_key_path(id), &[]).await
    }

    pub async fn list_api_keys(
        &self,
        query: &PageQuery,
    ) -> Result<Response<TokenListResponse>, Error> {
        self.get("/keys", &query.to_params()).await
    }

    pub async fn api_key_exists(&self, id: &str) -> Result<bool, Error> {
        self.head(&api_key_path(id)).await
    }

    pub async fn delete_api_key(&self, id: &str) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&api_key_path(id), &[]).await
    }
}
