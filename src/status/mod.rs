// ABOUTME: Status queries against the container lock service.
// ABOUTME: Exports the snapshot model, fetch errors, and the HTTP client.

mod client;
mod error;
mod snapshot;

pub use client::{HttpStatusClient, StatusSource};
pub use error::FetchError;
pub use snapshot::StatusSnapshot;
