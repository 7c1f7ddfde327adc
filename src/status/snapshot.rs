// ABOUTME: Point-in-time status snapshot for one container.
// ABOUTME: Wire model of GET /container/{id}/status responses.

use serde::Deserialize;

/// One status query result, immutable once parsed.
///
/// `is_clickable` and `is_locked` are both required on the wire; a body
/// missing either is rejected during parsing rather than defaulted.
/// `container_status` is an open string so new backend lifecycle labels do
/// not break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusSnapshot {
    /// True iff the session may be entered right now.
    pub is_clickable: bool,

    /// True iff another party currently holds the container.
    pub is_locked: bool,

    /// Holder of the lock, present only while locked.
    #[serde(default)]
    pub locked_by_ip: Option<String>,

    /// Backend lifecycle label ("running", "exited", "starting", ...).
    pub container_status: String,
}

impl StatusSnapshot {
    /// Lifecycle label for a container that has stopped.
    pub const EXITED: &'static str = "exited";

    pub fn is_exited(&self) -> bool {
        self.container_status == Self::EXITED
    }
}
