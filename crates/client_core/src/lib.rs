//! Client side of the user-management panel: configuration, HTTP transport,
//! the list/form controller and its observable state, and pure renderers.

pub mod config;
pub mod controller;
pub mod error;
pub mod row;
pub mod transport;
pub mod types;
pub mod view;

pub use config::{ClientConfig, ConfigError};
pub use controller::UserController;
pub use error::{ControllerError, Operation, RemoteCallError};
pub use row::{render_row, UserRow};
pub use transport::{HttpUsersApi, UsersApi};
pub use types::{ControllerEvent, CreateDraft, UpdateDraft, UserListState};
