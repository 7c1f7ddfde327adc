// ABOUTME: Rendering and navigation seam between controllers and the page.
// ABOUTME: Controllers never touch markup directly; they drive this trait.

use crate::view::VisualState;
use std::sync::Arc;

/// One control element's mutable face.
///
/// Implementations wrap whatever actually renders the button (markup
/// bindings in production, recorders in tests). Each surface belongs to
/// exactly one controller; nothing else mutates it.
pub trait ControlSurface: Send + Sync {
    /// Render a visual state: icon, label, status text, and disabled flag.
    fn apply(&self, state: &VisualState);

    /// Whether the control is currently rendered disabled.
    ///
    /// This reflects the last applied state, not a fresh query; the click
    /// gate uses it as its fast path.
    fn rendered_disabled(&self) -> bool;

    /// Issue a full page transition to the given path.
    fn navigate(&self, path: &str);

    /// Show a blocking notification to the user.
    fn notify(&self, message: &str);
}

/// Capability that re-renders icons after a state change.
///
/// Stands in for the page-global icon library rescan. Must be idempotent;
/// concurrent controllers may invoke it redundantly and the last rescan
/// wins. Absence means icons stay unrendered, which is tolerated.
pub type IconRefresher = Arc<dyn Fn() + Send + Sync>;
