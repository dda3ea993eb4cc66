//! Inbound protocol messages from the game engine.
//!
//! Every data-carrying message wraps its payload in a `message` field.
//! Sentinels are bare values and are recognized before any of these types
//! are parsed.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AgentError;
use crate::objects::GameObject;
use crate::types::ObjectId;

/// `{ "message": <payload> }`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub message: T,
}

/// First message of the match: which tank is ours.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    #[serde(rename = "your-tank-id")]
    pub tank_id: ObjectId,
}

/// Initialization payload. Only `updated_objects` is read; initialization
/// messages may omit `deleted_objects`.
///
/// Objects are keyed by identifier in a sorted map, so iteration order is
/// deterministic for a given message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitUpdate {
    pub updated_objects: BTreeMap<ObjectId, GameObject>,
}

/// Turn payload. Both fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnUpdate {
    pub updated_objects: BTreeMap<ObjectId, GameObject>,
    pub deleted_objects: Vec<ObjectId>,
}

impl Identity {
    pub fn from_value(value: Value) -> Result<Self, AgentError> {
        parse_envelope(value, "identity")
    }
}

impl InitUpdate {
    pub fn from_value(value: Value) -> Result<Self, AgentError> {
        parse_envelope(value, "initialization")
    }
}

impl TurnUpdate {
    pub fn from_value(value: Value) -> Result<Self, AgentError> {
        parse_envelope(value, "turn")
    }
}

fn parse_envelope<T: serde::de::DeserializeOwned>(
    value: Value,
    what: &str,
) -> Result<T, AgentError> {
    if value.get("message").is_none() {
        return Err(AgentError::Protocol(format!(
            "{what} message has no `message` field: {value}"
        )));
    }
    let envelope: Envelope<T> = serde_json::from_value(value)?;
    Ok(envelope.message)
}
