use thiserror::Error;

use crate::protocol::ServiceError;

/// Everything a call can fail with. Callers that need to branch on semantic
/// vs. infrastructural failure match on `Service` vs. the rest.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
