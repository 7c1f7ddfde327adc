// ABOUTME: Per-button controller: recurring status polls plus the click gate.
// ABOUTME: Generation-tagged fetches keep stale results off the surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::status::StatusSource;
use crate::types::{ContainerId, SessionName};
use crate::view::{self, VisualState};

use super::surface::{ControlSurface, IconRefresher};

/// Result of driving the click gate once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Control was rendered disabled or already disposed; nothing fetched.
    Ignored,
    /// Freshness check confirmed clickability; navigation was issued.
    Navigated,
    /// Freshness check refused the click; the user was notified why.
    Denied,
    /// Freshness check itself failed; generic notification, no navigation.
    Unavailable,
}

struct ControllerInner {
    container_id: ContainerId,
    session_name: SessionName,
    source: Arc<dyn StatusSource>,
    surface: Arc<dyn ControlSurface>,
    icon_refresher: Option<IconRefresher>,
    /// Bumped once per issued fetch; results tagged with an older value
    /// are discarded instead of rendered.
    generation: AtomicU64,
    disposed: AtomicBool,
    /// Serializes the generation check with the render it guards.
    render: Mutex<()>,
}

impl ControllerInner {
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Render a state only if no newer fetch has been issued since and the
    /// controller is still live. Returns whether it was applied.
    fn apply_if_current(&self, generation: u64, state: &VisualState) -> bool {
        let _guard = self.render.lock();

        if self.disposed.load(Ordering::SeqCst) {
            tracing::debug!(
                container = %self.container_id,
                "discarding status result that completed after disposal"
            );
            return false;
        }

        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(
                container = %self.container_id,
                generation,
                "discarding superseded status result"
            );
            return false;
        }

        self.surface.apply(state);
        if let Some(refresh) = &self.icon_refresher {
            refresh();
        }
        true
    }

    /// One scheduled poll cycle. Failures are logged and swallowed; the
    /// previously rendered state stays in place.
    async fn poll_once(&self) {
        let generation = self.next_generation();

        match self.source.fetch_status(&self.container_id).await {
            Ok(snapshot) => {
                self.apply_if_current(generation, &view::map(&snapshot));
            }
            Err(e) => {
                tracing::warn!(
                    container = %self.container_id,
                    error = %e,
                    "status poll failed"
                );
            }
        }
    }
}

/// Controller for one session button.
///
/// Lifecycle is `init()` once, then `dispose()` once; disposal is a
/// terminal state and both calls are idempotent. While polling, the
/// controller fetches immediately and then on a fixed period, applying
/// each result through the generation check.
pub struct ControlController {
    inner: Arc<ControllerInner>,
    poll_interval: Duration,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl ControlController {
    pub fn new(
        container_id: ContainerId,
        session_name: SessionName,
        source: Arc<dyn StatusSource>,
        surface: Arc<dyn ControlSurface>,
        poll_interval: Duration,
        icon_refresher: Option<IconRefresher>,
    ) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                container_id,
                session_name,
                source,
                surface,
                icon_refresher,
                generation: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
                render: Mutex::new(()),
            }),
            poll_interval,
            poll_task: Mutex::new(None),
        }
    }

    pub fn container_id(&self) -> &ContainerId {
        &self.inner.container_id
    }

    pub fn session_name(&self) -> &SessionName {
        &self.inner.session_name
    }

    /// Start polling. No-op if already polling or disposed; a disposed
    /// controller never comes back.
    pub fn init(&self) {
        let mut task = self.poll_task.lock();
        if task.is_some() || self.inner.disposed.load(Ordering::SeqCst) {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let period = self.poll_interval;

        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                // Each cycle fetches in its own task so a hung request
                // delays only its own update, never the next tick.
                let cycle = Arc::clone(&inner);
                tokio::spawn(async move { cycle.poll_once().await });
            }
        }));
    }

    pub fn is_polling(&self) -> bool {
        self.poll_task.lock().is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }

    /// Stop polling and detach from the surface. Idempotent.
    ///
    /// In-flight fetches are not cancelled; their completions are detected
    /// as post-disposal and discarded before touching the surface.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::SeqCst) {
            return;
        }

        if let Some(task) = self.poll_task.lock().take() {
            task.abort();
        }

        tracing::debug!(container = %self.inner.container_id, "controller disposed");
    }

    /// The click gate: recheck freshness before allowing navigation.
    ///
    /// A click on a disabled control is swallowed against the last rendered
    /// state without any network traffic. Otherwise one fresh fetch decides:
    /// clickable navigates to the session page, anything else notifies the
    /// user, and a failed fetch shows the generic unavailable message.
    pub async fn handle_click(&self) -> ClickOutcome {
        let inner = &self.inner;

        if inner.disposed.load(Ordering::SeqCst) || inner.surface.rendered_disabled() {
            return ClickOutcome::Ignored;
        }

        let generation = inner.next_generation();

        match inner.source.fetch_status(&inner.container_id).await {
            Ok(snapshot) => {
                // Click-triggered fetches refresh the rendering too
                inner.apply_if_current(generation, &view::map(&snapshot));

                if inner.disposed.load(Ordering::SeqCst) {
                    return ClickOutcome::Ignored;
                }

                if snapshot.is_clickable {
                    inner.surface.navigate(&inner.session_name.session_path());
                    ClickOutcome::Navigated
                } else {
                    inner.surface.notify(&view::denial_message(&snapshot));
                    ClickOutcome::Denied
                }
            }
            Err(e) => {
                tracing::warn!(
                    container = %inner.container_id,
                    error = %e,
                    "click-time status check failed"
                );

                if inner.disposed.load(Ordering::SeqCst) {
                    return ClickOutcome::Ignored;
                }

                inner.surface.notify(view::unavailable_message());
                ClickOutcome::Unavailable
            }
        }
    }
}

impl Drop for ControlController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for ControlController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlController")
            .field("container_id", &self.inner.container_id)
            .field("session_name", &self.inner.session_name)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
