// ABOUTME: Status source trait and its HTTP implementation.
// ABOUTME: One plain http1 request per query, no retries, no caching.

use async_trait::async_trait;
use http_body_util::BodyExt;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::types::ContainerId;

use super::error::FetchError;
use super::snapshot::StatusSnapshot;

/// Source of status snapshots for containers.
///
/// Kept open for external implementations so controllers can be driven by
/// stubs in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Query the current status of one container.
    async fn fetch_status(&self, id: &ContainerId) -> Result<StatusSnapshot, FetchError>;
}

/// HTTP client for the lock service's per-container status endpoint.
///
/// Opens a fresh connection per query. Polling is infrequent enough that
/// connection reuse buys nothing, and a dead kept-alive connection would
/// turn into spurious fetch failures.
#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    authority: String,
}

impl HttpStatusClient {
    /// Create a client for the given `host:port` authority.
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }
}

#[async_trait]
impl StatusSource for HttpStatusClient {
    async fn fetch_status(&self, id: &ContainerId) -> Result<StatusSnapshot, FetchError> {
        let stream = TcpStream::connect(&self.authority).await.map_err(|e| {
            FetchError::Connect(format!("failed to connect to {}: {}", self.authority, e))
        })?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| FetchError::Connect(format!("HTTP handshake failed: {}", e)))?;

        // Drive the connection until the response is done
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("status connection error: {}", e);
            }
        });

        let req = hyper::Request::builder()
            .method("GET")
            .uri(id.status_path())
            .header("Host", self.authority.clone())
            .body(http_body_util::Empty::<bytes::Bytes>::new())
            .map_err(|e| FetchError::Connect(format!("failed to build request: {}", e)))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| FetchError::Connect(format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| FetchError::Connect(format!("failed to read body: {}", e)))?;

        serde_json::from_slice(&body.to_bytes()).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
