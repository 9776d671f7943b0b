//! JSON-RPC 2.0 envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `web3_clientVersion`
pub const CLIENT_VERSION: &str = "web3_clientVersion";
/// `eth_blockNumber`
pub const BLOCK_NUMBER: &str = "eth_blockNumber";
/// `eth_gasPrice`
pub const GAS_PRICE: &str = "eth_gasPrice";

/// A parameterless JSON-RPC request.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: [Value; 0],
    id: u64,
}

impl<'a> Request<'a> {
    /// Build a request for `method` with no parameters.
    pub fn new(method: &'a str, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params: [],
            id,
        }
    }
}

/// A JSON-RPC response. Exactly one of `result` and `error` is expected,
/// but both are optional so that misbehaving endpoints still decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Successful result.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error object.
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

/// The JSON-RPC error object.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorObject {
    /// Error code.
    #[serde(default)]
    pub code: i64,
    /// Error message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_empty_params() {
        let body = serde_json::to_value(Request::new(BLOCK_NUMBER, 1)).unwrap();
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "method": "eth_blockNumber", "params": [], "id": 1})
        );
    }

    #[test]
    fn response_with_result() {
        let resp: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": "0x10"})).unwrap();
        assert_eq!(resp.result, Some(json!("0x10")));
        assert!(resp.error.is_none());
    }

    #[test]
    fn response_with_error() {
        let resp: Response = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32601, "message": "Method not found"}
        }))
        .unwrap();
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "Method not found");
        assert!(resp.result.is_none());
    }

    #[test]
    fn response_with_null_result() {
        let resp: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": null})).unwrap();
        assert!(resp.result.is_none());
    }
}
