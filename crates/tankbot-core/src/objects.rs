//! Typed game objects as reported by the engine.
//!
//! Each object arrives as a JSON map with a `type` discriminant. Parsing
//! dispatches on the discriminant and then reads the kind-specific fields,
//! so a missing required field or an unknown kind fails the whole message.
//! Fields the agent does not use are not modeled and never fail a parse.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::enums::ObjectKind;
use crate::error::AgentError;
use crate::types::{Position, Velocity};

/// A tank. Ours or the opponent's, decided by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub position: Position,
    pub velocity: Velocity,
    /// Hull heading in degrees, when the engine reports it as a number.
    #[serde(
        default,
        deserialize_with = "number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub heading: Option<f64>,
}

/// A bullet in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructibleWall {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub position: Position,
}

/// Polygonal arena limit. Used for both the fixed and the closing boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Ordered polygon vertices.
    #[serde(rename = "position")]
    pub vertices: Vec<Position>,
}

impl Boundary {
    /// Half of the maximum x and y vertex coordinates.
    ///
    /// This is the midpoint of the extent measured from the origin, not the
    /// polygon centroid. Returns `None` for an empty vertex list.
    pub fn extent_midpoint(&self) -> Option<Position> {
        if self.vertices.is_empty() {
            return None;
        }
        let max_x = self
            .vertices
            .iter()
            .map(|v| v.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_y = self
            .vertices
            .iter()
            .map(|v| v.y)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(Position::new(max_x / 2.0, max_y / 2.0))
    }
}

/// Any object the engine can report, tagged by kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawObject")]
pub enum GameObject {
    Tank(Tank),
    Bullet(Bullet),
    Wall(Wall),
    DestructibleWall(DestructibleWall),
    Powerup(Powerup),
    Boundary(Boundary),
    ClosingBoundary(Boundary),
}

impl GameObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            GameObject::Tank(_) => ObjectKind::Tank,
            GameObject::Bullet(_) => ObjectKind::Bullet,
            GameObject::Wall(_) => ObjectKind::Wall,
            GameObject::DestructibleWall(_) => ObjectKind::DestructibleWall,
            GameObject::Powerup(_) => ObjectKind::Powerup,
            GameObject::Boundary(_) => ObjectKind::Boundary,
            GameObject::ClosingBoundary(_) => ObjectKind::ClosingBoundary,
        }
    }

    /// Point position of the object. Boundaries have vertices instead.
    pub fn position(&self) -> Option<Position> {
        match self {
            GameObject::Tank(t) => Some(t.position),
            GameObject::Bullet(b) => Some(b.position),
            GameObject::Wall(w) => Some(w.position),
            GameObject::DestructibleWall(w) => Some(w.position),
            GameObject::Powerup(p) => Some(p.position),
            GameObject::Boundary(_) | GameObject::ClosingBoundary(_) => None,
        }
    }
}

/// Optional numeric field that degrades to `None` on any other JSON type.
fn number_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Untyped wire form: the discriminant plus whatever else was sent.
#[derive(Deserialize)]
struct RawObject {
    #[serde(rename = "type")]
    kind: u64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl TryFrom<RawObject> for GameObject {
    type Error = AgentError;

    fn try_from(raw: RawObject) -> Result<Self, Self::Error> {
        let kind = ObjectKind::try_from(raw.kind)?;
        let body = Value::Object(raw.fields);
        let invalid = |source: serde_json::Error| AgentError::InvalidObject { kind, source };
        let object = match kind {
            ObjectKind::Tank => GameObject::Tank(serde_json::from_value(body).map_err(invalid)?),
            ObjectKind::Bullet => {
                GameObject::Bullet(serde_json::from_value(body).map_err(invalid)?)
            }
            ObjectKind::Wall => GameObject::Wall(serde_json::from_value(body).map_err(invalid)?),
            ObjectKind::DestructibleWall => {
                GameObject::DestructibleWall(serde_json::from_value(body).map_err(invalid)?)
            }
            ObjectKind::Powerup => {
                GameObject::Powerup(serde_json::from_value(body).map_err(invalid)?)
            }
            ObjectKind::Boundary => {
                GameObject::Boundary(serde_json::from_value(body).map_err(invalid)?)
            }
            ObjectKind::ClosingBoundary => {
                GameObject::ClosingBoundary(serde_json::from_value(body).map_err(invalid)?)
            }
        };
        Ok(object)
    }
}
