// ABOUTME: Error type for status queries.
// ABOUTME: Covers transport failures, non-success responses, and bad bodies.

use thiserror::Error;

/// Errors from a single status query.
///
/// One query, one error; retry cadence belongs to the poll loop, never to
/// the client itself.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not reach the status endpoint (connect, handshake, or transport).
    #[error("status endpoint unreachable: {0}")]
    Connect(String),

    /// Endpoint answered with a non-success HTTP status.
    #[error("status endpoint returned HTTP {0}")]
    Status(u16),

    /// Body was not a well-formed status snapshot.
    #[error("malformed status body: {0}")]
    Parse(String),
}

impl FetchError {
    /// True when the failure came from the response body rather than transport.
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }
}
