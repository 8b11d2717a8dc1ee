//! Nullable transport: record requests, answer from canned replies.

use pasc_types::{Transport, TransportError};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

enum Reply {
    /// A full response body, sent as is.
    Body(String),
    /// A `result` value wrapped in an envelope carrying the request's id.
    Result(Value),
    /// An `error` object wrapped in an envelope carrying the request's id.
    Error { code: i32, message: String },
    Fail(TransportError),
}

/// A transport that records requests instead of sending them.
///
/// Replies registered for a method with [`NullTransport::on`] (and friends)
/// take precedence over the FIFO queue filled by [`NullTransport::reply`].
/// With nothing to answer, it replies like a node that does not know the
/// method (code 1001).
#[derive(Default)]
pub struct NullTransport {
    requests: Mutex<Vec<String>>,
    queue: Mutex<VecDeque<Reply>>,
    by_method: Mutex<HashMap<String, VecDeque<Reply>>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body for the next request, whatever its method.
    pub fn reply(&self, body: impl Into<String>) -> &Self {
        lock(&self.queue).push_back(Reply::Body(body.into()));
        self
    }

    /// Queue a raw response body for the next `method` request.
    pub fn on(&self, method: &str, body: impl Into<String>) -> &Self {
        self.push_for(method, Reply::Body(body.into()))
    }

    /// Answer the next `method` request with `result`, echoing its id.
    pub fn on_result(&self, method: &str, result: Value) -> &Self {
        self.push_for(method, Reply::Result(result))
    }

    /// Answer the next `method` request with an error object, echoing its id.
    pub fn on_error(&self, method: &str, code: i32, message: impl Into<String>) -> &Self {
        self.push_for(
            method,
            Reply::Error {
                code,
                message: message.into(),
            },
        )
    }

    /// Fail the next request below the JSON-RPC layer.
    pub fn fail_with(&self, error: TransportError) -> &Self {
        lock(&self.queue).push_back(Reply::Fail(error));
        self
    }

    /// Raw bodies of every request seen so far.
    pub fn request_bodies(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Every request seen so far, parsed.
    pub fn requests(&self) -> Vec<Value> {
        lock(&self.requests)
            .iter()
            .map(|b| serde_json::from_str(b).unwrap_or(Value::Null))
            .collect()
    }

    pub fn last_request(&self) -> Option<Value> {
        self.requests().pop()
    }

    /// Method names in call order.
    pub fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r["method"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Clear all state.
    pub fn reset(&self) {
        lock(&self.requests).clear();
        lock(&self.queue).clear();
        lock(&self.by_method).clear();
    }

    fn push_for(&self, method: &str, reply: Reply) -> &Self {
        lock(&self.by_method)
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    fn next_reply(&self, method: &str) -> Option<Reply> {
        let matched = lock(&self.by_method)
            .get_mut(method)
            .and_then(|replies| replies.pop_front());
        matched.or_else(|| lock(&self.queue).pop_front())
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Transport for NullTransport {
    async fn post(&self, body: String) -> Result<String, TransportError> {
        let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        lock(&self.requests).push(body);

        let id = request["id"].clone();
        let method = request["method"].as_str().unwrap_or_default();
        let envelope = |member: &str, value: Value| {
            let mut env = json!({"id": id, "jsonrpc": "2.0"});
            env[member] = value;
            env.to_string()
        };

        match self.next_reply(method) {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Result(result)) => Ok(envelope("result", result)),
            Some(Reply::Error { code, message }) => {
                Ok(envelope("error", json!({"code": code, "message": message})))
            }
            Some(Reply::Fail(error)) => Err(error),
            None => Ok(envelope(
                "error",
                json!({"code": 1001, "message": format!("Method not found: {method}")}),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, id: u32) -> String {
        json!({"jsonrpc": "2.0", "method": method, "id": id}).to_string()
    }

    #[tokio::test]
    async fn records_requests_and_echoes_ids() {
        let t = NullTransport::new();
        t.on_result("getblockcount", json!(32117));
        let body = t.post(request("getblockcount", 9)).await.unwrap();
        let reply: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(reply["id"], 9);
        assert_eq!(reply["result"], 32117);
        assert_eq!(t.methods(), vec!["getblockcount"]);
    }

    #[tokio::test]
    async fn method_replies_beat_the_queue() {
        let t = NullTransport::new();
        t.reply(r#"{"id":1,"jsonrpc":"2.0","result":"queued"}"#);
        t.on_error("lock", 1015, "Wallet is password protected");
        let body = t.post(request("lock", 1)).await.unwrap();
        assert!(body.contains("1015"));
        let body = t.post(request("unlock", 2)).await.unwrap();
        assert!(body.contains("queued"));
    }

    #[tokio::test]
    async fn unknown_method_and_failures() {
        let t = NullTransport::new();
        let body = t.post(request("nosuch", 3)).await.unwrap();
        assert!(body.contains("1001"));
        t.fail_with(TransportError::Timeout);
        assert_eq!(t.post(request("nodestatus", 4)).await, Err(TransportError::Timeout));
        assert_eq!(t.request_bodies().len(), 2);
        t.reset();
        assert!(t.requests().is_empty());
    }
}
