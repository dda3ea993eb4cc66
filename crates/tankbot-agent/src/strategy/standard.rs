//! Standard strategy.
//!
//! - Head for the nearest powerup if any are on the map, otherwise for the
//!   middle of the closing boundary's extent.
//! - Shoot at the opponent every turn it can be reached.

use tracing::{debug, warn};

use tankbot_core::commands::ActionSet;
use tankbot_core::constants::BULLET_SPEED;
use tankbot_core::enums::AimMode;
use tankbot_core::types::Position;

use crate::guidance;
use crate::strategy::Strategy;
use crate::world::WorldModel;

#[derive(Debug, Clone)]
pub struct StandardStrategy {
    aim_mode: AimMode,
    bullet_speed: f64,
    /// Current movement goal. Replaced once reached.
    current_goal: Option<Position>,
}

impl Default for StandardStrategy {
    fn default() -> Self {
        Self::new(AimMode::default(), BULLET_SPEED)
    }
}

impl StandardStrategy {
    pub fn new(aim_mode: AimMode, bullet_speed: f64) -> Self {
        Self {
            aim_mode,
            bullet_speed,
            current_goal: None,
        }
    }

    pub fn current_goal(&self) -> Option<Position> {
        self.current_goal
    }

    /// Nearest powerup by the goal metric, else the closing boundary's
    /// extent midpoint.
    fn choose_goal(world: &WorldModel, from: &Position) -> Option<Position> {
        let powerups = world.powerups().map(|(_, powerup)| powerup.position);
        guidance::nearest_by_manhattan(powerups, from)
            .or_else(|| world.closing_boundary()?.extent_midpoint())
    }
}

impl Strategy for StandardStrategy {
    fn decide(&mut self, world: &WorldModel) -> ActionSet {
        let mut actions = ActionSet::default();

        let Some(our_tank) = world.our_tank() else {
            warn!(tank_id = %world.tank_id(), "our tank not observed yet, skipping turn");
            return actions;
        };

        // Exact comparison: the goal counts as reached only when the
        // reported position matches it bit for bit.
        let goal_reached = self
            .current_goal
            .map_or(true, |goal| goal == our_tank.position);
        if goal_reached {
            self.current_goal = Self::choose_goal(world, &our_tank.position);
            match self.current_goal {
                Some(goal) => {
                    debug!(x = goal.x, y = goal.y, "new movement goal");
                    actions.path = Some(goal);
                }
                None => debug!("no powerups and no closing boundary, holding position"),
            }
        }

        if let Some(opponent) = world.opponent_tank() {
            actions.shoot = match self.aim_mode {
                AimMode::Direct => Some(guidance::direct_bearing(
                    &our_tank.position,
                    &opponent.position,
                )),
                AimMode::Intercept => {
                    let bearing = guidance::intercept_bearing(
                        &our_tank.position,
                        &our_tank.velocity,
                        &opponent.position,
                        &opponent.velocity,
                        self.bullet_speed,
                    );
                    if bearing.is_none() {
                        debug!("opponent unreachable within horizon, holding fire");
                    }
                    bearing
                }
            };
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankbot_core::objects::{Boundary, GameObject, Powerup, Tank};
    use tankbot_core::types::{ObjectId, Velocity};

    fn tank(x: f64, y: f64, vx: f64, vy: f64) -> GameObject {
        GameObject::Tank(Tank {
            position: Position::new(x, y),
            velocity: Velocity::new(vx, vy),
            heading: None,
        })
    }

    fn powerup(x: f64, y: f64) -> GameObject {
        GameObject::Powerup(Powerup {
            position: Position::new(x, y),
        })
    }

    fn closing_boundary() -> GameObject {
        GameObject::ClosingBoundary(Boundary {
            vertices: vec![
                Position::new(0.0, 0.0),
                Position::new(10.0, 0.0),
                Position::new(10.0, 8.0),
                Position::new(0.0, 8.0),
            ],
        })
    }

    fn world_with_us_at(x: f64, y: f64) -> WorldModel {
        let mut world = WorldModel::new(ObjectId::from("A"));
        world.upsert(ObjectId::from("A"), tank(x, y, 0.0, 0.0));
        world
    }

    #[test]
    fn test_goes_for_nearest_powerup() {
        let mut world = world_with_us_at(1.0, 1.0);
        world.upsert(ObjectId::from("p1"), powerup(0.0, 0.0));
        world.upsert(ObjectId::from("p2"), powerup(3.0, 1.0));
        world.upsert(ObjectId::from("cb"), closing_boundary());

        let mut strategy = StandardStrategy::default();
        let actions = strategy.decide(&world);
        assert_eq!(actions.path, Some(Position::new(0.0, 0.0)));
        assert_eq!(actions.shoot, None, "no opponent, no shot");
    }

    #[test]
    fn test_falls_back_to_boundary_midpoint() {
        let mut world = world_with_us_at(1.0, 1.0);
        world.upsert(ObjectId::from("cb"), closing_boundary());

        let mut strategy = StandardStrategy::default();
        let actions = strategy.decide(&world);
        assert_eq!(actions.path, Some(Position::new(5.0, 4.0)));
        assert_eq!(strategy.current_goal(), Some(Position::new(5.0, 4.0)));
    }

    #[test]
    fn test_keeps_goal_until_exactly_reached() {
        let mut world = world_with_us_at(1.0, 1.0);
        world.upsert(ObjectId::from("cb"), closing_boundary());
        let mut strategy = StandardStrategy::default();
        assert!(strategy.decide(&world).path.is_some());

        // A powerup appears, but the current goal is not reached yet.
        world.upsert(ObjectId::from("p1"), powerup(2.0, 2.0));
        world.upsert(ObjectId::from("A"), tank(4.999, 4.0, 0.0, 0.0));
        let actions = strategy.decide(&world);
        assert_eq!(actions.path, None);
        assert_eq!(strategy.current_goal(), Some(Position::new(5.0, 4.0)));

        // Reached exactly: pick again.
        world.upsert(ObjectId::from("A"), tank(5.0, 4.0, 0.0, 0.0));
        let actions = strategy.decide(&world);
        assert_eq!(actions.path, Some(Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_no_goal_without_powerups_or_boundary() {
        let world = world_with_us_at(1.0, 1.0);
        let mut strategy = StandardStrategy::default();
        let actions = strategy.decide(&world);
        assert!(actions.is_empty());
        assert_eq!(strategy.current_goal(), None);
    }

    #[test]
    fn test_empty_actions_without_our_tank() {
        let mut world = WorldModel::new(ObjectId::from("A"));
        world.upsert(ObjectId::from("B"), tank(100.0, 0.0, 0.0, 0.0));
        world.upsert(ObjectId::from("cb"), closing_boundary());

        let mut strategy = StandardStrategy::default();
        assert!(strategy.decide(&world).is_empty());
    }

    #[test]
    fn test_intercept_shot() {
        let mut world = world_with_us_at(0.0, 0.0);
        world.upsert(ObjectId::from("B"), tank(100.0, 0.0, 0.0, 0.0));

        let mut strategy = StandardStrategy::default();
        let actions = strategy.decide(&world);
        assert_eq!(actions.shoot, Some(0.0));
    }

    #[test]
    fn test_unreachable_opponent_omits_shoot() {
        let mut world = world_with_us_at(0.0, 0.0);
        world.upsert(ObjectId::from("B"), tank(100.0, 0.0, 1000.0, 0.0));
        world.upsert(ObjectId::from("cb"), closing_boundary());

        let mut strategy = StandardStrategy::default();
        let actions = strategy.decide(&world);
        assert_eq!(actions.shoot, None);
        assert!(actions.path.is_some());
    }

    #[test]
    fn test_direct_aim_ignores_motion() {
        let mut world = world_with_us_at(0.0, 0.0);
        world.upsert(ObjectId::from("B"), tank(0.0, 50.0, 1000.0, 0.0));

        let mut strategy = StandardStrategy::new(AimMode::Direct, BULLET_SPEED);
        let shoot = strategy.decide(&world).shoot.unwrap();
        assert!((shoot - 90.0).abs() < 1e-9, "shoot {shoot}");
    }
}
