//! Aiming and goal-selection math used by strategies.
//!
//! Provides the interception bearing search, the direct bearing, and the
//! distance metric used to pick the nearest powerup.

use tankbot_core::constants::{INTERCEPT_MAX_STEPS, INTERCEPT_STEP_SECS};
use tankbot_core::types::{Position, Velocity};

/// Firing bearing (degrees) that leads a linearly moving target.
///
/// Forward time search: for each candidate `target_time` in
/// `0, step, 2*step, ...` below the horizon, both tanks are extrapolated by
/// `target_time`, the bearing between them is taken, and the bullet flight
/// time needed to close the x separation along that bearing is computed.
/// The first bearing whose flight time is shorter than `target_time` wins.
///
/// This is an approximation with step `INTERCEPT_STEP_SECS` and horizon
/// `INTERCEPT_HORIZON_SECS`. `None` means no solution inside the horizon:
/// do not fire this turn.
///
/// When the extrapolated tanks share an x coordinate the flight time
/// degenerates to zero and the first positive candidate is accepted.
pub fn intercept_bearing(
    shooter_pos: &Position,
    shooter_vel: &Velocity,
    target_pos: &Position,
    target_vel: &Velocity,
    bullet_speed: f64,
) -> Option<f64> {
    for step in 0..INTERCEPT_MAX_STEPS {
        let target_time = f64::from(step) * INTERCEPT_STEP_SECS;

        let shooter = shooter_pos.extrapolate(shooter_vel, target_time);
        let target = target_pos.extrapolate(target_vel, target_time);
        let theta = shooter.bearing_to_deg(&target);

        let dx = target.x - shooter.x;
        let flight_time = dx / (bullet_speed * theta.to_radians().cos());

        if flight_time < target_time {
            return Some(theta);
        }
    }
    None
}

/// Bearing (degrees) straight at the target's current position.
pub fn direct_bearing(shooter_pos: &Position, target_pos: &Position) -> f64 {
    shooter_pos.bearing_to_deg(target_pos)
}

/// Goal-selection metric: `|dx| + dy`.
///
/// The y term is signed, so candidates below `to` score lower than their
/// true Manhattan distance. Kept as-is; goal choice depends on it.
pub fn manhattan_distance(from: &Position, to: &Position) -> f64 {
    (from.x - to.x).abs() + (from.y - to.y)
}

/// Candidate with the smallest [`manhattan_distance`] to `origin`.
/// Ties go to the first candidate in iteration order.
pub fn nearest_by_manhattan(
    candidates: impl IntoIterator<Item = Position>,
    origin: &Position,
) -> Option<Position> {
    candidates.into_iter().min_by(|a, b| {
        manhattan_distance(a, origin).total_cmp(&manhattan_distance(b, origin))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankbot_core::constants::BULLET_SPEED;

    fn still() -> Velocity {
        Velocity::default()
    }

    #[test]
    fn test_intercept_stationary_direct_line() {
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &still(),
            &Position::new(100.0, 0.0),
            &still(),
            BULLET_SPEED,
        );
        assert_eq!(bearing, Some(0.0));
    }

    #[test]
    fn test_intercept_stationary_behind() {
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &still(),
            &Position::new(-100.0, 0.0),
            &still(),
            BULLET_SPEED,
        )
        .unwrap();
        assert!((bearing - 180.0).abs() < 1e-9, "bearing {bearing}");
    }

    #[test]
    fn test_intercept_leads_crossing_target() {
        // Target 100 units east moving north at 100 u/s: the solution is
        // found near t = 0.23 where the target is ~23 units north.
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &still(),
            &Position::new(100.0, 0.0),
            &Velocity::new(0.0, 100.0),
            BULLET_SPEED,
        )
        .unwrap();
        let expected = 23.0_f64.atan2(100.0).to_degrees();
        assert!((bearing - expected).abs() < 1e-9, "bearing {bearing}");
        assert!(bearing > 0.0, "should lead the target northward");
    }

    #[test]
    fn test_intercept_accounts_for_shooter_motion() {
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &Velocity::new(0.0, 100.0),
            &Position::new(100.0, 0.0),
            &still(),
            BULLET_SPEED,
        )
        .unwrap();
        assert!(bearing < 0.0, "moving north, target falls behind: {bearing}");
    }

    #[test]
    fn test_intercept_unreachable_when_target_outruns_bullet() {
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &still(),
            &Position::new(100.0, 0.0),
            &Velocity::new(1000.0, 0.0),
            BULLET_SPEED,
        );
        assert_eq!(bearing, None);
    }

    #[test]
    fn test_intercept_unreachable_beyond_horizon() {
        // Flight time 3000 / 450 = 6.67s, past the 5s horizon.
        let bearing = intercept_bearing(
            &Position::new(0.0, 0.0),
            &still(),
            &Position::new(3000.0, 0.0),
            &still(),
            BULLET_SPEED,
        );
        assert_eq!(bearing, None);
    }

    #[test]
    fn test_direct_bearing() {
        let b = direct_bearing(&Position::new(0.0, 0.0), &Position::new(10.0, 10.0));
        assert!((b - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_manhattan_signed_y_term() {
        let agent = Position::new(1.0, 1.0);
        assert_eq!(manhattan_distance(&Position::new(0.0, 0.0), &agent), 0.0);
        assert_eq!(manhattan_distance(&Position::new(3.0, 1.0), &agent), 2.0);
        assert_eq!(manhattan_distance(&Position::new(1.0, -4.0), &agent), -5.0);
    }

    #[test]
    fn test_nearest_prefers_lower_metric() {
        let agent = Position::new(1.0, 1.0);
        let nearest = nearest_by_manhattan(
            [Position::new(3.0, 1.0), Position::new(0.0, 0.0)],
            &agent,
        );
        assert_eq!(nearest, Some(Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_nearest_tie_goes_to_first() {
        let agent = Position::new(0.0, 0.0);
        let a = Position::new(2.0, 0.0);
        let b = Position::new(-2.0, 0.0);
        assert_eq!(nearest_by_manhattan([a, b], &agent), Some(a));
        assert_eq!(nearest_by_manhattan([b, a], &agent), Some(b));
        assert_eq!(nearest_by_manhattan(std::iter::empty(), &agent), None);
    }
}
