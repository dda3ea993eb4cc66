//! Fundamental geometric types and object identifiers.

use std::borrow::Borrow;
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Engine-assigned object identifier. Opaque, stable while the object exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 2D position in arena space. Serialized as `[x, y]`.
///
/// Equality is exact; the engine reports positions verbatim and the standard
/// strategy relies on that when checking whether a goal was reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in arena units per second. Serialized as `[vx, vy]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear extrapolation: `position + velocity * t`.
    pub fn extrapolate(&self, velocity: &Velocity, t: f64) -> Position {
        (DVec2::from(*self) + DVec2::from(*velocity) * t).into()
    }

    /// Bearing to another position in degrees, `atan2(dy, dx)`.
    /// 0 = +x axis, counter-clockwise positive, range (-180, 180].
    pub fn bearing_to_deg(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx).to_degrees()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl From<[f64; 2]> for Velocity {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Velocity> for [f64; 2] {
    fn from(v: Velocity) -> Self {
        [v.x, v.y]
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Velocity> for DVec2 {
    fn from(v: Velocity) -> Self {
        DVec2::new(v.x, v.y)
    }
}
