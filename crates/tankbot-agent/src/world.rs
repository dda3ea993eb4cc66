//! Local world model: the agent's authoritative snapshot of the arena.
//!
//! Tanks and boundaries live in singleton slots; every other kind lives in a
//! container keyed by identifier. Only `TurnLoop` mutates the model;
//! strategies get `&WorldModel`.

use std::collections::BTreeMap;

use tankbot_core::enums::ObjectKind;
use tankbot_core::objects::{Boundary, GameObject, Powerup, Tank};
use tankbot_core::types::ObjectId;

/// Snapshot of every object the engine has reported and not yet deleted.
#[derive(Debug, Clone)]
pub struct WorldModel {
    tank_id: ObjectId,
    our_tank: Option<Tank>,
    opponent_tank: Option<Tank>,
    // The engine reports at most one of each boundary per match.
    boundary: Option<Boundary>,
    closing_boundary: Option<Boundary>,
    containers: BTreeMap<ObjectKind, BTreeMap<ObjectId, GameObject>>,
}

impl WorldModel {
    /// Create an empty model for the agent controlling `tank_id`.
    pub fn new(tank_id: ObjectId) -> Self {
        let containers = ObjectKind::CONTAINER_KINDS
            .iter()
            .map(|kind| (*kind, BTreeMap::new()))
            .collect();
        Self {
            tank_id,
            our_tank: None,
            opponent_tank: None,
            boundary: None,
            closing_boundary: None,
            containers,
        }
    }

    /// Insert or overwrite an object, routed by its kind.
    ///
    /// Tanks go to `our_tank` when `id` matches our tank id and to
    /// `opponent_tank` otherwise. Boundaries are last-write-wins.
    pub fn upsert(&mut self, id: ObjectId, object: GameObject) {
        match object {
            GameObject::Tank(tank) => {
                if id == self.tank_id {
                    self.our_tank = Some(tank);
                } else {
                    self.opponent_tank = Some(tank);
                }
            }
            GameObject::Boundary(boundary) => self.boundary = Some(boundary),
            GameObject::ClosingBoundary(boundary) => self.closing_boundary = Some(boundary),
            other => {
                self.containers
                    .entry(other.kind())
                    .or_default()
                    .insert(id, other);
            }
        }
    }

    /// Delete `id` from every container. Unknown ids are a no-op.
    ///
    /// Tank and boundary slots are not addressable here; the engine never
    /// deletes them. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let mut removed = false;
        for container in self.containers.values_mut() {
            removed |= container.remove(id).is_some();
        }
        removed
    }

    pub fn tank_id(&self) -> &ObjectId {
        &self.tank_id
    }

    pub fn our_tank(&self) -> Option<&Tank> {
        self.our_tank.as_ref()
    }

    pub fn opponent_tank(&self) -> Option<&Tank> {
        self.opponent_tank.as_ref()
    }

    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    pub fn closing_boundary(&self) -> Option<&Boundary> {
        self.closing_boundary.as_ref()
    }

    /// Objects of a container kind, in identifier order.
    /// Singleton kinds (tanks, boundaries) yield nothing.
    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = (&ObjectId, &GameObject)> {
        self.containers.get(&kind).into_iter().flatten()
    }

    /// Look up a container object by identifier.
    pub fn get(&self, id: &str) -> Option<&GameObject> {
        self.containers.values().find_map(|container| container.get(id))
    }

    /// Powerups currently on the map, in identifier order.
    pub fn powerups(&self) -> impl Iterator<Item = (&ObjectId, &Powerup)> {
        self.objects_of(ObjectKind::Powerup)
            .filter_map(|(id, object)| match object {
                GameObject::Powerup(powerup) => Some((id, powerup)),
                _ => None,
            })
    }

    /// Number of objects in a container kind.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.containers.get(&kind).map_or(0, BTreeMap::len)
    }

    /// Total number of objects held, singletons included.
    pub fn len(&self) -> usize {
        let singletons = [
            self.our_tank.is_some(),
            self.opponent_tank.is_some(),
            self.boundary.is_some(),
            self.closing_boundary.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        singletons + self.containers.values().map(BTreeMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
