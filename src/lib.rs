//! Synchronous JSON-RPC 2.0 client for a Sui full node.
//!
//! ```no_run
//! use serde_json::json;
//!
//! let client = suirpc::SuiRpc::new("http://127.0.0.1:9000");
//! let schema = client.discover().unwrap();
//! println!("{} methods", schema["methods"].as_array().map_or(0, |m| m.len()));
//!
//! let raw = client.call("sui_getObject", vec![json!("0x2")]).unwrap();
//! println!("{}", raw.get());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod transport;

pub use client::{SuiRpc, SuiRpcBuilder};
pub use error::RpcError;
pub use logging::{DebugLog, StdLogger};
pub use protocol::{RpcRequest, RpcResponse, ServiceError};
pub use transport::{HttpTransport, UreqTransport};
