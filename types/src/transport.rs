//! The seam between the RPC layer and the wire.
//!
//! The client only needs "POST this JSON body, give me the response body".
//! Production code uses an HTTP implementation; tests plug in a recording
//! double that never touches the network.

use std::future::Future;
use thiserror::Error;

/// Failures below the JSON-RPC layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("unreadable response body: {0}")]
    Body(String),

    #[error("transport error: {0}")]
    Other(String),
}

/// Something that can carry one JSON-RPC request body to the node.
pub trait Transport: Send + Sync {
    /// POST `body` and resolve to the raw response body.
    fn post(&self, body: String) -> impl Future<Output = Result<String, TransportError>> + Send;
}
