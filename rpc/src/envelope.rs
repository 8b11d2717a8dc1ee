//! JSON-RPC 2.0 request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorCode, RpcErrorObject};

pub const JSONRPC_VERSION: &str = "2.0";

/// An outgoing request. `params` is left out entirely when there are none.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    pub id: u32,
}

impl<'a> Request<'a> {
    /// Build a request, dropping `params` when they serialise to nothing
    /// (`null` or an empty object).
    pub fn new(method: &'a str, params: Value, id: u32) -> Self {
        let params = match params {
            Value::Null => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other),
        };
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        }
    }
}

/// The outcome of one call.
///
/// Exactly one of `result` and `error` is set. The client guarantees this
/// even for malformed node replies: anything it cannot interpret becomes an
/// [`ErrorCode::InternalError`] error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub id: u32,
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

fn default_version() -> String {
    JSONRPC_VERSION.to_string()
}

impl<T> Response<T> {
    pub fn success(id: u32, result: T) -> Self {
        Self {
            id,
            jsonrpc: default_version(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: u32, error: RpcErrorObject) -> Self {
        Self {
            id,
            jsonrpc: default_version(),
            result: None,
            error: Some(error),
        }
    }

    pub fn internal(id: u32, message: impl Into<String>) -> Self {
        Self::failure(id, RpcErrorObject::internal(message))
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }

    pub fn into_result(self) -> Result<T, RpcErrorObject> {
        match (self.error, self.result) {
            (Some(error), _) => Err(error),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(RpcErrorObject::internal("response carries neither result nor error")),
        }
    }

    pub fn as_result(&self) -> Result<&T, RpcErrorObject> {
        match (&self.error, &self.result) {
            (Some(error), _) => Err(error.clone()),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(RpcErrorObject::internal("response carries neither result nor error")),
        }
    }

    /// Map the result, keeping id, version and error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            id: self.id,
            jsonrpc: self.jsonrpc,
            result: self.result.map(f),
            error: self.error,
        }
    }

    /// Enforce "exactly one of result or error". An error wins over a
    /// result; neither becomes an internal error.
    pub(crate) fn normalise(mut self) -> Self {
        match (&self.result, &self.error) {
            (Some(_), Some(_)) => {
                tracing::warn!(id = self.id, "response carries both result and error, keeping error");
                self.result = None;
                self
            }
            (None, None) => {
                tracing::warn!(id = self.id, "response carries neither result nor error");
                Self::internal(self.id, "response carries neither result nor error")
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_params_are_omitted() {
        let req = Request::new("nodestatus", json!({}), 1);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"jsonrpc":"2.0","method":"nodestatus","id":1}"#
        );
        let req = Request::new("lock", Value::Null, 2);
        assert!(serde_json::to_value(&req).unwrap().get("params").is_none());
        let req = Request::new("getaccount", json!({"account": 296}), 3);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"jsonrpc":"2.0","method":"getaccount","params":{"account":296},"id":3}"#
        );
    }

    #[test]
    fn error_wins_over_result() {
        let r: Response<u32> = serde_json::from_value(json!({
            "id": 4, "jsonrpc": "2.0", "result": 7,
            "error": {"code": 1002, "message": "Invalid account"}
        }))
        .unwrap();
        let r = r.normalise();
        assert_eq!(r.result, None);
        assert_eq!(r.error_code(), Some(ErrorCode::InvalidAccount));
    }

    #[test]
    fn neither_becomes_internal() {
        let r: Response<u32> = serde_json::from_value(json!({"id": 5, "jsonrpc": "2.0"})).unwrap();
        let r = r.normalise();
        assert_eq!(r.id, 5);
        assert_eq!(r.error_code(), Some(ErrorCode::InternalError));
    }

    #[test]
    fn into_result_and_map() {
        let r = Response::success(1, 2u32).map(|n| n * 10);
        assert_eq!(r.as_result(), Ok(&20));
        assert_eq!(r.into_result(), Ok(20));
        let e: Response<u32> = Response::internal(2, "boom");
        assert!(!e.is_ok());
        assert_eq!(e.into_result().unwrap_err().message, "boom");
    }
}
