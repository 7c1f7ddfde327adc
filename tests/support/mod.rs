// ABOUTME: Shared test doubles for controller and client tests.
// ABOUTME: Recording surfaces, scripted status sources, and a raw HTTP stub.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use async_trait::async_trait;
use sessiongate::control::ControlSurface;
use sessiongate::status::{FetchError, StatusSnapshot, StatusSource};
use sessiongate::types::ContainerId;
use sessiongate::view::VisualState;

/// Build a snapshot without going through the wire format.
pub fn snapshot(
    clickable: bool,
    locked: bool,
    ip: Option<&str>,
    status: &str,
) -> StatusSnapshot {
    StatusSnapshot {
        is_clickable: clickable,
        is_locked: locked,
        locked_by_ip: ip.map(String::from),
        container_status: status.to_string(),
    }
}

/// Surface that records every mutation instead of rendering.
pub struct RecordingSurface {
    applied: Mutex<Vec<VisualState>>,
    navigations: Mutex<Vec<String>>,
    notifications: Mutex<Vec<String>>,
    disabled: AtomicBool,
}

impl RecordingSurface {
    /// Surface whose initial rendering is enabled.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            applied: Mutex::new(Vec::new()),
            navigations: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
            disabled: AtomicBool::new(false),
        })
    }

    /// Surface whose initial rendering is disabled.
    pub fn new_disabled() -> Arc<Self> {
        let surface = Self::new();
        surface.disabled.store(true, Ordering::SeqCst);
        surface
    }

    pub fn applied(&self) -> Vec<VisualState> {
        self.applied.lock().clone()
    }

    pub fn last_applied(&self) -> Option<VisualState> {
        self.applied.lock().last().cloned()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().clone()
    }
}

impl ControlSurface for RecordingSurface {
    fn apply(&self, state: &VisualState) {
        self.disabled.store(state.disabled, Ordering::SeqCst);
        self.applied.lock().push(state.clone());
    }

    fn rendered_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    fn navigate(&self, path: &str) {
        self.navigations.lock().push(path.to_string());
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().push(message.to_string());
    }
}

/// Status source that answers from a fixed script.
///
/// Each call consumes one scripted reply; once the script is exhausted every
/// further call fails with a connect error, which pollers swallow.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<StatusSnapshot, String>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<StatusSnapshot, String>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch_status(&self, _id: &ContainerId) -> Result<StatusSnapshot, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().pop_front() {
            Some(Ok(snapshot)) => Ok(snapshot),
            Some(Err(message)) => Err(FetchError::Connect(message)),
            None => Err(FetchError::Connect("script exhausted".to_string())),
        }
    }
}

/// Status source whose replies are held back until the test releases them.
///
/// Lets tests control completion order independently of issue order.
pub struct GatedSource {
    gates: Mutex<VecDeque<(oneshot::Receiver<()>, StatusSnapshot)>>,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gates: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Queue a reply; the returned sender releases it.
    pub fn stage(&self, reply: StatusSnapshot) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back((rx, reply));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for GatedSource {
    async fn fetch_status(&self, _id: &ContainerId) -> Result<StatusSnapshot, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().pop_front();
        let (rx, reply) = gate.expect("fetch issued beyond staged gates");
        // Dropped sender releases too; tests only care about ordering
        let _ = rx.await;
        Ok(reply)
    }
}

/// Give spawned controller tasks a chance to run up to their next await.
///
/// Sleeps instead of yielding: on current tokio a bare `yield_now` defers
/// its wake without parking the runtime, so freshly spawned tasks are
/// never polled. Each short sleep forces a park, which drains the queue.
pub async fn settle() {
    for _ in 0..16 {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
    }
}

/// Serve exactly one canned HTTP response, returning the raw request read.
pub async fn serve_once(response: String) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0u8; 4096];
        let mut request = String::new();
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            request.push_str(&String::from_utf8_lossy(&buf[..n]));
            if n == 0 || request.contains("\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).await.expect("write response");
        stream.shutdown().await.ok();
        request
    });

    (addr, handle)
}

/// Minimal http1 response with a JSON body.
pub fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}
