// IMPORTANT:
// Keep ALL constant values centralized here (repo rule: no hardcoded values scattered around).

// NOTE: CLIENT_VERSION must stay in sync with the `version` field in Cargo.toml.
pub const CLIENT_VERSION: &str = "0.1.0";

/// JSON-RPC protocol version carried in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Content type of every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Standard service-discovery method; returns the node's OpenRPC schema.
pub const DISCOVER_METHOD: &str = "rpc.discover";

/// Default local full-node endpoint, used by the demo binary when no URL is given.
pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:9000";

pub mod transport {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}
