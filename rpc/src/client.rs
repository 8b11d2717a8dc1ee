//! The invocation layer: one JSON-RPC call in, one [`Response`] out.

use pasc_types::Transport;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::ClientConfig;
use crate::envelope::{Request, Response, JSONRPC_VERSION};
use crate::error::{ClientError, RpcErrorObject};
use crate::http::HttpTransport;

/// JSON-RPC client for a PascalCoin node.
///
/// Cheap to share behind an `Arc`: the call-id counter is the only mutable
/// state and it is atomic. No call holds a lock across the network round
/// trip, and nothing is cached or retried.
pub struct PascClient<T: Transport = HttpTransport> {
    transport: T,
    last_id: AtomicU32,
}

impl PascClient<HttpTransport> {
    /// Client talking HTTP to `config.url`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

/// What the node sends back, before the client enforces its own rules.
#[derive(Deserialize)]
struct WireResponse<R> {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default = "Option::default")]
    result: Option<R>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

fn encode_request<P: Serialize>(method: &str, params: P, id: u32) -> Result<String, serde_json::Error> {
    let params = serde_json::to_value(params)?;
    serde_json::to_string(&Request::new(method, params, id))
}

impl<T: Transport> PascClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            last_id: AtomicU32::new(0),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Id of the most recently issued call, 0 before the first one.
    pub fn last_id(&self) -> u32 {
        self.last_id.load(Ordering::Relaxed)
    }

    fn next_id(&self) -> u32 {
        self.last_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Call `method` with `params` (anything that serialises to a JSON
    /// object, `()` for none).
    ///
    /// Never fails: transport errors, undecodable bodies and replies that
    /// break "exactly one of result or error" all come back as an
    /// `InternalError` response carrying this call's id.
    pub async fn invoke<R, P>(&self, method: &str, params: P) -> Response<R>
    where
        R: DeserializeOwned,
        P: Serialize,
    {
        let id = self.next_id();
        let body = match encode_request(method, params, id) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(method, id, error = %e, "failed to encode request");
                return Response::internal(id, format!("failed to encode request: {e}"));
            }
        };
        tracing::debug!(method, id, "rpc call");
        tracing::trace!(method, id, %body, "request body");

        let raw = match self.transport.post(body).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(method, id, error = %e, "transport failure");
                return Response::internal(id, e.to_string());
            }
        };
        tracing::trace!(method, id, body = %raw, "response body");

        let wire: WireResponse<R> = match serde_json::from_str(&raw) {
            Ok(wire) => wire,
            Err(e) => {
                tracing::warn!(method, id, error = %e, "malformed response");
                return Response::internal(id, format!("malformed response: {e}"));
            }
        };
        if let Some(reply_id) = wire.id.filter(|reply_id| *reply_id != id) {
            tracing::debug!(method, id, reply_id, "response id differs from request id");
        }
        let response = Response {
            id: wire.id.unwrap_or(id),
            jsonrpc: wire.jsonrpc.unwrap_or_else(|| JSONRPC_VERSION.to_string()),
            result: wire.result,
            error: wire.error,
        }
        .normalise();
        if let Some(error) = &response.error {
            tracing::debug!(method, id, code = %error.code, message = %error.message, "node returned error");
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_encoding_drops_unit_params() {
        let body = encode_request("getblockcount", (), 1).unwrap();
        assert_eq!(body, r#"{"jsonrpc":"2.0","method":"getblockcount","id":1}"#);
    }

    #[test]
    fn request_encoding_rejects_non_string_map_keys() {
        let mut bad = std::collections::BTreeMap::new();
        bad.insert(vec![1u8], 1);
        assert!(encode_request("x", bad, 1).is_err());
    }
}
