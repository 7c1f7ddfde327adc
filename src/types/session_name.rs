// ABOUTME: Display name of a container session.
// ABOUTME: Used to derive the /session/{name} navigation target.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionNameError {
    #[error("session name cannot be empty")]
    Empty,

    #[error("session name cannot contain path separators")]
    PathSeparator,
}

/// Human-facing name of a container session.
///
/// Navigation targets are derived from the name, not the container id, so the
/// name must not be able to escape the /session/ route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionName(String);

impl SessionName {
    pub fn new(value: &str) -> Result<Self, SessionNameError> {
        if value.is_empty() {
            return Err(SessionNameError::Empty);
        }

        if value.contains('/') || value.contains('\\') {
            return Err(SessionNameError::PathSeparator);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full page transition target for entering this session.
    pub fn session_path(&self) -> String {
        format!("/session/{}", urlencoding::encode(&self.0))
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
