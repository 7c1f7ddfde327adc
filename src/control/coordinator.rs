// ABOUTME: Page-level owner of session button controllers.
// ABOUTME: Mounts one controller per eligible control, disposes all on teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ButtonsConfig;
use crate::status::StatusSource;
use crate::types::{ContainerId, SessionName};

use super::controller::ControlController;
use super::surface::{ControlSurface, IconRefresher};

/// A control element found in page markup, before validation.
///
/// Identity comes from the element's two markup attributes; either may be
/// absent, in which case the control is not eligible.
pub struct DiscoveredControl {
    pub container_id: Option<String>,
    pub session_name: Option<String>,
    pub surface: Arc<dyn ControlSurface>,
}

/// Explicit registry of every active controller on a page.
///
/// Owns its controllers outright: they are created during `mount` and
/// disposed exactly once, either by the teardown hook calling
/// `dispose_all` or by the coordinator being dropped. No poll task
/// outlives the coordinator.
pub struct PageCoordinator {
    controllers: Vec<ControlController>,
    disposed: AtomicBool,
}

impl PageCoordinator {
    /// Build and start a controller for every eligible discovered control.
    ///
    /// Controls missing either identity attribute, or carrying values that
    /// fail validation, are skipped silently (debug-logged, not an error).
    pub fn mount(
        controls: impl IntoIterator<Item = DiscoveredControl>,
        source: Arc<dyn StatusSource>,
        config: &ButtonsConfig,
        icon_refresher: Option<IconRefresher>,
    ) -> Self {
        let mut controllers = Vec::new();

        for control in controls {
            let (Some(id), Some(name)) = (control.container_id, control.session_name) else {
                tracing::debug!("skipping control with missing identity attributes");
                continue;
            };

            let container_id = match ContainerId::new(&id) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping control with invalid container id");
                    continue;
                }
            };

            let session_name = match SessionName::new(&name) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping control with invalid session name");
                    continue;
                }
            };

            let controller = ControlController::new(
                container_id,
                session_name,
                Arc::clone(&source),
                control.surface,
                config.poll_interval,
                icon_refresher.clone(),
            );
            controller.init();
            controllers.push(controller);
        }

        tracing::debug!(count = controllers.len(), "mounted session button controllers");

        Self {
            controllers,
            disposed: AtomicBool::new(false),
        }
    }

    pub fn controllers(&self) -> &[ControlController] {
        &self.controllers
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Page teardown hook. Disposes every controller; later calls no-op.
    pub fn dispose_all(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }

        for controller in &self.controllers {
            controller.dispose();
        }
    }
}

impl Drop for PageCoordinator {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
