// transport.rs — HTTP transport capability.
//
// The client talks to the node through this trait so tests can substitute a
// stub. The default implementation uses a blocking ureq agent.

use std::io::Read;
use std::time::Duration;

use crate::config;
use crate::error::RpcError;

/// Blocking HTTP POST capability. Implementations must read the full response
/// body and release the connection on every path, and must NOT interpret HTTP
/// status codes: the JSON-RPC envelope alone decides success or failure.
pub trait HttpTransport: Send + Sync {
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<Vec<u8>, RpcError>;
}

/// Default transport backed by a shared `ureq` agent with a per-request timeout.
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(config::transport::DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::agent(),
            timeout,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<Vec<u8>, RpcError> {
        let resp = match self
            .agent
            .post(url)
            .timeout(self.timeout)
            .set("Content-Type", content_type)
            .send_bytes(body)
        {
            Ok(resp) => resp,
            // Nodes report JSON-RPC errors on non-2xx statuses too; keep the
            // body and let the envelope decide.
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(RpcError::Transport(e.to_string())),
        };

        let mut data = Vec::new();
        resp.into_reader()
            .read_to_end(&mut data)
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        Ok(data)
    }
}
