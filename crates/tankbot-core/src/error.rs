//! Error taxonomy for the agent.
//!
//! Every variant is fatal to the match: the protocol stream cannot be
//! resynchronized once a message fails to parse. Redundant deletes and
//! unreachable targets are not errors and have no variant here.

use thiserror::Error;

use crate::enums::ObjectKind;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("transport I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {kind:?} object: {source}")]
    InvalidObject {
        kind: ObjectKind,
        source: serde_json::Error,
    },

    #[error("unknown object type discriminant {0}")]
    UnknownObjectKind(u64),

    #[error("protocol violation: {0}")]
    Protocol(String),

    #[error("transport closed before the match ended")]
    TransportClosed,
}
