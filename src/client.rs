// client.rs — the JSON-RPC client itself.
//
// Each call is an independent request/response round trip; the only state
// carried between calls is configuration plus the request-id counter.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::config;
use crate::error::RpcError;
use crate::logging::{DebugLog, StdLogger};
use crate::protocol::{RpcRequest, RpcResponse};
use crate::transport::{HttpTransport, UreqTransport};

/// Synchronous JSON-RPC 2.0 client for a single Sui node endpoint.
///
/// Request ids come from a per-client atomic counter (first call gets id 1),
/// so concurrent calls through a shared client stay distinguishable on the
/// wire. Responses are still matched by the synchronous round trip, not by id.
pub struct SuiRpc {
    url: String,
    transport: Box<dyn HttpTransport>,
    logger: Box<dyn DebugLog>,
    debug: bool,
    next_id: AtomicU64,
}

impl SuiRpc {
    /// Client with default configuration: ureq transport, `log`-facade debug
    /// sink, debug dump off.
    pub fn new(url: impl Into<String>) -> Self {
        Self::builder(url).build()
    }

    pub fn builder(url: impl Into<String>) -> SuiRpcBuilder {
        SuiRpcBuilder {
            url: url.into(),
            transport: Box::new(UreqTransport::new()),
            logger: Box::new(StdLogger),
            debug: false,
        }
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Calls `method` and returns the raw `result` payload for the caller to
    /// decode. An envelope-level `error` from the node comes back as
    /// [`RpcError::Service`]; a missing `result` decodes as raw `null`.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<Box<RawValue>, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        let body = serde_json::to_vec(&request).map_err(RpcError::Serialization)?;

        let data = self
            .transport
            .post(&self.url, config::CONTENT_TYPE_JSON, &body)?;

        if self.debug {
            self.logger.log(&format!(
                "{}\nRequest: {}\nResponse: {}\n",
                method,
                String::from_utf8_lossy(&body),
                String::from_utf8_lossy(&data)
            ));
        }

        let response: RpcResponse =
            serde_json::from_slice(&data).map_err(RpcError::Deserialization)?;

        if let Some(err) = response.error {
            return Err(RpcError::Service(err));
        }

        match response.result {
            Some(raw) => Ok(raw),
            None => serde_json::value::to_raw_value(&Value::Null).map_err(RpcError::Deserialization),
        }
    }

    /// Calls `method` and decodes the result into `T`. Callers that do not
    /// want the result decoded use [`SuiRpc::call`] directly.
    pub fn call_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let raw = self.call(method, params)?;
        serde_json::from_str(raw.get()).map_err(RpcError::Deserialization)
    }

    /// Fetches the node's OpenRPC schema via `rpc.discover`.
    pub fn discover(&self) -> Result<Map<String, Value>, RpcError> {
        self.call_typed(config::DISCOVER_METHOD, Vec::new())
    }
}

pub struct SuiRpcBuilder {
    url: String,
    transport: Box<dyn HttpTransport>,
    logger: Box<dyn DebugLog>,
    debug: bool,
}

impl SuiRpcBuilder {
    /// Substitute the HTTP transport capability.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Substitute the debug-dump sink.
    pub fn logger(mut self, logger: impl DebugLog + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Enable the per-call debug dump (method, request body, response body).
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    pub fn build(self) -> SuiRpc {
        SuiRpc {
            url: self.url,
            transport: self.transport,
            logger: self.logger,
            debug: self.debug,
            next_id: AtomicU64::new(1),
        }
    }
}
