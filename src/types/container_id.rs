// ABOUTME: Container identifier validation.
// ABOUTME: Status queries are addressed by this opaque, non-empty identifier.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerIdError {
    #[error("container id cannot be empty")]
    Empty,

    #[error("container id cannot contain whitespace")]
    Whitespace,
}

/// Opaque identifier of the container a control is bound to.
///
/// The backend treats it as a lookup key; this type only guarantees it is
/// non-empty and safe to place in a request path once percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(value: &str) -> Result<Self, ContainerIdError> {
        if value.is_empty() {
            return Err(ContainerIdError::Empty);
        }

        if value.chars().any(|c| c.is_whitespace()) {
            return Err(ContainerIdError::Whitespace);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Request path of the status endpoint for this container.
    pub fn status_path(&self) -> String {
        format!("/container/{}/status", urlencoding::encode(&self.0))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
