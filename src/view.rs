// ABOUTME: Pure mapping from a status snapshot to a rendered button state.
// ABOUTME: Also derives the blocking notification text for refused clicks.

use crate::status::StatusSnapshot;

/// Placeholder holder shown when a locked snapshot carries no holder IP.
const UNKNOWN_HOLDER: &str = "unknown";

/// Coarse classification of a rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    /// Session may be entered now.
    Connectable,
    /// Another party holds the container.
    Locked,
    /// Container has exited.
    Stopped,
    /// Any other lifecycle label (starting, restarting, ...).
    Transitioning,
}

/// Everything a control surface needs to render one button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualState {
    pub kind: VisualKind,
    pub label: &'static str,
    /// Lucide icon identifier for the icon target.
    pub icon: &'static str,
    /// Affordance class applied to the control element.
    pub class: &'static str,
    pub disabled: bool,
    pub status_text: String,
}

/// Map a snapshot to its rendered state.
///
/// Total and deterministic; precedence is clickable, then locked, then
/// exited, with every other lifecycle label treated as transitioning so new
/// backend labels degrade to a disabled loading button instead of an error.
/// A snapshot claiming both clickable and locked renders as connectable;
/// clickability wins.
pub fn map(snapshot: &StatusSnapshot) -> VisualState {
    if snapshot.is_clickable {
        VisualState {
            kind: VisualKind::Connectable,
            label: "Connect",
            icon: "play-circle",
            class: "button-connect",
            disabled: false,
            status_text: format!("Status: {}", snapshot.container_status),
        }
    } else if snapshot.is_locked {
        let holder = snapshot.locked_by_ip.as_deref().unwrap_or(UNKNOWN_HOLDER);
        VisualState {
            kind: VisualKind::Locked,
            label: "In Use",
            icon: "lock",
            class: "button-locked",
            disabled: true,
            status_text: format!("Locked by: {}", holder),
        }
    } else if snapshot.is_exited() {
        VisualState {
            kind: VisualKind::Stopped,
            label: "Stopped",
            icon: "square",
            class: "button-stopped",
            disabled: true,
            status_text: format!("Status: {}", snapshot.container_status),
        }
    } else {
        VisualState {
            kind: VisualKind::Transitioning,
            label: "Loading...",
            icon: "loader",
            class: "button-loading",
            disabled: true,
            status_text: format!("Status: {}", snapshot.container_status),
        }
    }
}

/// Notification text for a click refused by the freshness check.
///
/// Same precedence as `map` minus the connectable branch, which never
/// refuses.
pub fn denial_message(snapshot: &StatusSnapshot) -> String {
    if snapshot.is_locked {
        let holder = snapshot.locked_by_ip.as_deref().unwrap_or(UNKNOWN_HOLDER);
        format!("Container is currently in use by {}", holder)
    } else if snapshot.is_exited() {
        "Container is stopped. Please wait for it to start.".to_string()
    } else {
        format!(
            "Container is not available. Status: {}",
            snapshot.container_status
        )
    }
}

/// Notification text for a click whose freshness check itself failed.
pub fn unavailable_message() -> &'static str {
    "Unable to check container status. Please try again."
}
