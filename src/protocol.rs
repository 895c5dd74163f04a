// protocol.rs — JSON-RPC 2.0 wire types.
//
// The request is built fresh per call; the response keeps `result` as raw JSON
// so the caller decides how (and whether) to decode it.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::config;

#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: &str, params: Vec<Value>) -> Self {
        Self {
            id,
            jsonrpc: config::JSONRPC_VERSION,
            method: method.to_string(),
            params,
        }
    }
}

/// Response envelope. Servers are not fully trusted here: every field tolerates
/// being absent or null, and only one of `result`/`error` is meaningful.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// An error the node itself reported inside the JSON-RPC envelope, as opposed
/// to a transport or decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    pub code: i64,
    pub message: String,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {} ({})", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}
