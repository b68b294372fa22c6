use std::fmt;

use thiserror::Error;

/// The remote operation a controller call maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure talking to the backend: transport, non-2xx status, or undecodable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("remote call failed ({op}): {message}")]
pub struct RemoteCallError {
    pub op: Operation,
    pub message: String,
}

impl RemoteCallError {
    pub fn new(op: Operation, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Remote(#[from] RemoteCallError),
    #[error("update id {raw:?} is not an integer")]
    InvalidUpdateId { raw: String },
}

impl ControllerError {
    pub fn operation(&self) -> Operation {
        match self {
            ControllerError::Remote(err) => err.op,
            ControllerError::InvalidUpdateId { .. } => Operation::Update,
        }
    }
}
