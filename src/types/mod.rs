// ABOUTME: Validated domain types for sessiongate.
// ABOUTME: Container identifiers and session names with construction-time checks.

mod container_id;
mod session_name;

pub use container_id::{ContainerId, ContainerIdError};
pub use session_name::{SessionName, SessionNameError};
