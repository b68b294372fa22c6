//! Form drafts and the observable list state, with the local patch rules applied
//! after each successful remote call.

use std::num::ParseIntError;

use shared::{
    domain::{UserId, UserRecord},
    protocol::UserPayload,
};

use crate::error::Operation;

/// Input of the "add user" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDraft {
    pub name: String,
    pub email: String,
}

impl CreateDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn to_payload(&self) -> UserPayload {
        UserPayload::new(self.name.clone(), self.email.clone())
    }
}

/// Input of the "update user" form. `id` stays textual until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UpdateDraft {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn parse_id(&self) -> Result<UserId, ParseIntError> {
        self.id.parse()
    }

    pub fn to_payload(&self) -> UserPayload {
        UserPayload::new(self.name.clone(), self.email.clone())
    }
}

/// Everything a view needs to draw the panel. Users are newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListState {
    pub users: Vec<UserRecord>,
    pub create_draft: CreateDraft,
    pub update_draft: UpdateDraft,
}

impl UserListState {
    /// Backend lists oldest first; the panel shows newest first.
    pub fn replace_from_server(&mut self, mut users: Vec<UserRecord>) {
        users.reverse();
        self.users = users;
    }

    pub fn prepend(&mut self, user: UserRecord) {
        self.users.insert(0, user);
    }

    /// Rewrites name/email of every entry carrying `user_id`. Returns whether one matched.
    pub fn apply_update(&mut self, user_id: UserId, payload: &UserPayload) -> bool {
        let mut matched = false;
        for user in self.users.iter_mut().filter(|user| user.id == user_id) {
            *user = user.with_payload(payload);
            matched = true;
        }
        matched
    }

    /// Drops every entry carrying `user_id`. Returns how many were removed.
    pub fn remove(&mut self, user_id: UserId) -> usize {
        let before = self.users.len();
        self.users.retain(|user| user.id != user_id);
        before - self.users.len()
    }

    pub fn find(&self, user_id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Published after every local state change, carrying the new snapshot.
    StateChanged(UserListState),
    OperationFailed { op: Operation, message: String },
}
