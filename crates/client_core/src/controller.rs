//! The list/form controller.
//!
//! Owns the user list and both form drafts. Each operation issues exactly one
//! remote call and, only on success, patches the local list in place instead of
//! re-fetching. Failures are logged and published as
//! [`ControllerEvent::OperationFailed`]; the state is left untouched.
//!
//! Calls are independent: patches land in response order and are applied to the
//! list as it is at that moment, so overlapping operations never drop each
//! other's changes.

use std::sync::Arc;

use shared::domain::{UserId, UserRecord};
use tokio::sync::{broadcast, RwLock};
use tracing::{error, info, warn};

use crate::{
    config::{ClientConfig, ConfigError},
    error::ControllerError,
    transport::{HttpUsersApi, UsersApi},
    types::{ControllerEvent, CreateDraft, UpdateDraft, UserListState},
};

const EVENT_CAPACITY: usize = 256;

pub struct UserController {
    config: ClientConfig,
    api: Arc<dyn UsersApi>,
    state: RwLock<UserListState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl UserController {
    pub fn new(config: ClientConfig, api: Arc<dyn UsersApi>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Arc::new(Self {
            config,
            api,
            state: RwLock::new(UserListState::default()),
            events,
        })
    }

    /// Controller backed by [`HttpUsersApi`] at `config.api_base`.
    pub fn http(config: ClientConfig) -> Result<Arc<Self>, ConfigError> {
        config.validate()?;
        let api = Arc::new(HttpUsersApi::new(config.clone()));
        Ok(Self::new(config, api))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn snapshot(&self) -> UserListState {
        self.state.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    pub async fn set_create_draft(&self, draft: CreateDraft) {
        let mut guard = self.state.write().await;
        guard.create_draft = draft;
        self.publish(&guard);
    }

    pub async fn set_update_draft(&self, draft: UpdateDraft) {
        let mut guard = self.state.write().await;
        guard.update_draft = draft;
        self.publish(&guard);
    }

    /// Fills the create draft and submits it, publishing only the outcome.
    pub async fn submit_create(&self, draft: CreateDraft) -> Result<UserRecord, ControllerError> {
        self.state.write().await.create_draft = draft;
        self.create().await
    }

    /// Fills the update draft and submits it, publishing only the outcome.
    pub async fn submit_update(&self, draft: UpdateDraft) -> Result<(), ControllerError> {
        self.state.write().await.update_draft = draft;
        self.update().await
    }

    /// Mount-time read: replaces the list with the backend's, newest first.
    pub async fn load(&self) -> Result<(), ControllerError> {
        let users = match self.api.list_users().await {
            Ok(users) => users,
            Err(err) => return Err(self.fail(err.into())),
        };

        let mut guard = self.state.write().await;
        info!(count = users.len(), "loaded users");
        guard.replace_from_server(users);
        self.publish(&guard);
        Ok(())
    }

    /// Submits the create draft. On success the returned record is prepended and
    /// the draft cleared; on failure the draft is kept for resubmission.
    pub async fn create(&self) -> Result<UserRecord, ControllerError> {
        let payload = self.state.read().await.create_draft.to_payload();
        let created = match self.api.create_user(&payload).await {
            Ok(created) => created,
            Err(err) => return Err(self.fail(err.into())),
        };

        let mut guard = self.state.write().await;
        info!(user_id = created.id.0, "created user");
        guard.prepend(created.clone());
        guard.create_draft = CreateDraft::default();
        self.publish(&guard);
        Ok(created)
    }

    /// Submits the update draft. The id is parsed first; an unparsable id never
    /// reaches the backend.
    pub async fn update(&self) -> Result<(), ControllerError> {
        let draft = self.state.read().await.update_draft.clone();
        let user_id = match draft.parse_id() {
            Ok(user_id) => user_id,
            Err(_) => {
                return Err(self.fail(ControllerError::InvalidUpdateId { raw: draft.id }));
            }
        };
        let payload = draft.to_payload();

        if let Err(err) = self.api.update_user(user_id, &payload).await {
            return Err(self.fail(err.into()));
        }

        let mut guard = self.state.write().await;
        if !guard.apply_update(user_id, &payload) {
            warn!(user_id = user_id.0, "updated user is not in the local list");
        }
        guard.update_draft = UpdateDraft::default();
        self.publish(&guard);
        Ok(())
    }

    pub async fn delete(&self, user_id: UserId) -> Result<(), ControllerError> {
        if let Err(err) = self.api.delete_user(user_id).await {
            return Err(self.fail(err.into()));
        }

        let mut guard = self.state.write().await;
        let removed = guard.remove(user_id);
        info!(user_id = user_id.0, removed, "deleted user");
        self.publish(&guard);
        Ok(())
    }

    fn publish(&self, state: &UserListState) {
        let _ = self
            .events
            .send(ControllerEvent::StateChanged(state.clone()));
    }

    fn fail(&self, err: ControllerError) -> ControllerError {
        let op = err.operation();
        error!(%op, error = %err, "user operation failed");
        let _ = self.events.send(ControllerEvent::OperationFailed {
            op,
            message: err.to_string(),
        });
        err
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
