//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Kind discriminant carried in every object's `type` field.
///
/// The set is closed: any other value is a protocol error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ObjectKind {
    Tank,
    Bullet,
    Wall,
    DestructibleWall,
    Boundary,
    ClosingBoundary,
    Powerup,
}

impl ObjectKind {
    /// Kinds stored in the keyed containers (everything except the
    /// tank and boundary singletons).
    pub const CONTAINER_KINDS: [ObjectKind; 4] = [
        ObjectKind::Bullet,
        ObjectKind::Wall,
        ObjectKind::DestructibleWall,
        ObjectKind::Powerup,
    ];

    /// Wire discriminant.
    pub fn code(self) -> u64 {
        match self {
            ObjectKind::Tank => 1,
            ObjectKind::Bullet => 2,
            ObjectKind::Wall => 3,
            ObjectKind::DestructibleWall => 4,
            ObjectKind::Boundary => 5,
            ObjectKind::ClosingBoundary => 6,
            ObjectKind::Powerup => 7,
        }
    }
}

impl TryFrom<u64> for ObjectKind {
    type Error = AgentError;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ObjectKind::Tank),
            2 => Ok(ObjectKind::Bullet),
            3 => Ok(ObjectKind::Wall),
            4 => Ok(ObjectKind::DestructibleWall),
            5 => Ok(ObjectKind::Boundary),
            6 => Ok(ObjectKind::ClosingBoundary),
            7 => Ok(ObjectKind::Powerup),
            other => Err(AgentError::UnknownObjectKind(other)),
        }
    }
}

impl From<ObjectKind> for u64 {
    fn from(kind: ObjectKind) -> Self {
        kind.code()
    }
}

/// How the standard strategy computes its firing bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AimMode {
    /// Lead the opponent using the forward time search.
    #[default]
    Intercept,
    /// Fire straight at the opponent's current position.
    Direct,
}
