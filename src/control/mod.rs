// ABOUTME: Session button controllers and their page-level lifecycle.
// ABOUTME: Exports the surface seam, the controller, and the coordinator.

mod controller;
mod coordinator;
mod surface;

pub use controller::{ClickOutcome, ControlController};
pub use coordinator::{DiscoveredControl, PageCoordinator};
pub use surface::{ControlSurface, IconRefresher};
