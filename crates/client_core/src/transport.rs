//! HTTP side of the controller. [`UsersApi`] is the seam tests swap out.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{UserId, UserRecord},
    protocol::UserPayload,
};
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::{Operation, RemoteCallError},
};

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteCallError>;
    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, RemoteCallError>;
    /// Response body is ignored.
    async fn update_user(
        &self,
        user_id: UserId,
        payload: &UserPayload,
    ) -> Result<(), RemoteCallError>;
    /// Response body is ignored.
    async fn delete_user(&self, user_id: UserId) -> Result<(), RemoteCallError>;
}

pub struct HttpUsersApi {
    http: Client,
    config: ClientConfig,
}

impl HttpUsersApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    fn checked(
        op: Operation,
        sent: Result<Response, reqwest::Error>,
    ) -> Result<Response, RemoteCallError> {
        sent.and_then(Response::error_for_status)
            .map_err(|err| RemoteCallError::new(op, err.to_string()))
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteCallError> {
        let url = self.config.users_url();
        debug!(%url, "GET users");
        let res = Self::checked(Operation::Load, self.http.get(&url).send().await)?;
        res.json()
            .await
            .map_err(|err| RemoteCallError::new(Operation::Load, err.to_string()))
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, RemoteCallError> {
        let url = self.config.users_url();
        debug!(%url, "POST user");
        let res = Self::checked(
            Operation::Create,
            self.http.post(&url).json(payload).send().await,
        )?;
        res.json()
            .await
            .map_err(|err| RemoteCallError::new(Operation::Create, err.to_string()))
    }

    async fn update_user(
        &self,
        user_id: UserId,
        payload: &UserPayload,
    ) -> Result<(), RemoteCallError> {
        let url = self.config.user_url(user_id);
        debug!(%url, "PUT user");
        Self::checked(
            Operation::Update,
            self.http.put(&url).json(payload).send().await,
        )?;
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), RemoteCallError> {
        let url = self.config.user_url(user_id);
        debug!(%url, "DELETE user");
        Self::checked(Operation::Delete, self.http.delete(&url).send().await)?;
        Ok(())
    }
}
