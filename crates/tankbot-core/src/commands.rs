//! Actions the agent sends back to the engine each turn.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Outbound action set. Absent keys mean "no change requested".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSet {
    /// Next movement goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Position>,
    /// Firing bearing in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot: Option<f64>,
}

impl ActionSet {
    /// True when there is nothing to send this turn.
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.shoot.is_none()
    }
}
