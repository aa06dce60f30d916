#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use skirmish_core::components::Pose;
    use skirmish_core::constants::{DT, GRID_CELL_SIZE, HUNTER_MOVEMENT_SPEED};
    use skirmish_core::enums::TankArchetype;
    use skirmish_core::types::Position;
    use skirmish_nav::{find_path, BarrierGrid, FieldBounds};

    use crate::profiles::get_profile;
    use crate::steering::{evaluate, fire_cycle, PursuitContext};

    fn pose_at(x: f64, y: f64) -> Pose {
        Pose {
            position: Position::new(x, y),
            heading: 0.0,
        }
    }

    fn context<'a>(path: &'a [Position], pose: Pose, target: Position) -> PursuitContext<'a> {
        PursuitContext {
            path,
            pose,
            turret_angle: 0.25,
            movement_speed: HUNTER_MOVEMENT_SPEED,
            target_position: target,
        }
    }

    #[test]
    fn test_short_path_holds_position() {
        let target = Position::new(500.0, 0.0);
        for path in [&[][..], &[Position::new(32.0, 32.0)][..]] {
            let update = evaluate(&context(path, pose_at(32.0, 32.0), target));
            assert_eq!(update.velocity.speed(), 0.0, "Short path must hold");
            assert_eq!(update.heading, 0.0, "Heading unchanged while holding");
        }
    }

    #[test]
    fn test_steers_toward_second_waypoint() {
        // First waypoint is the agent's own cell center; index 1 is the
        // actual movement target.
        let path = [
            Position::new(32.0, 32.0),
            Position::new(96.0, 32.0),
            Position::new(160.0, 32.0),
        ];
        let update = evaluate(&context(&path, pose_at(32.0, 32.0), Position::new(0.0, 500.0)));

        assert!(update.velocity.x > 0.0, "Must move east toward waypoint 1");
        assert!((update.velocity.y).abs() < 1e-9);
        assert!(
            (update.velocity.speed() - HUNTER_MOVEMENT_SPEED).abs() < 1e-9,
            "Velocity magnitude equals movement speed"
        );
        assert!(
            update.heading.abs() < 1e-9,
            "Heading snaps straight to the travel direction"
        );
    }

    #[test]
    fn test_heading_snap_has_no_smoothing() {
        // Agent facing east, next waypoint due north: the heading flips in
        // a single evaluation.
        let path = [Position::new(32.0, 32.0), Position::new(32.0, 96.0)];
        let mut pose = pose_at(32.0, 32.0);
        pose.heading = 0.0;
        let update = evaluate(&context(&path, pose, Position::new(500.0, 0.0)));
        assert!(
            (update.heading - FRAC_PI_2).abs() < 1e-9,
            "Expected instant re-orientation to PI/2, got {}",
            update.heading
        );
    }

    #[test]
    fn test_turret_tracks_target_without_path() {
        // Even with no path, the turret keeps tracking the target chassis.
        let target = Position::new(132.0, 32.0); // due east of the agent
        let update = evaluate(&context(&[], pose_at(32.0, 32.0), target));
        assert!(
            (update.turret_angle - FRAC_PI_2).abs() < 1e-9,
            "Turret should aim east (sprite frame PI/2), got {}",
            update.turret_angle
        );
    }

    #[test]
    fn test_turret_holds_on_coincident_target() {
        let pose = pose_at(32.0, 32.0);
        let update = evaluate(&context(&[], pose, pose.position));
        assert_eq!(
            update.turret_angle, 0.25,
            "Zero-length aim vector keeps the previous turret angle"
        );
    }

    /// Repeatedly replanning and steering over an open grid converges on
    /// the goal in ticks proportional to the path length.
    #[test]
    fn test_steering_converges_on_goal() {
        let cell = GRID_CELL_SIZE;
        let grid = BarrierGrid::new(
            cell,
            FieldBounds {
                left: -cell,
                right: 5.0 * cell,
                bottom: -cell,
                top: 5.0 * cell,
            },
        );

        let goal = grid.cell_center((4, 4));
        let mut pose = pose_at(32.0, 32.0);

        let mut arrived = false;
        for _ in 0..2000 {
            let path = find_path(pose.position, goal, &grid, true);
            let update = evaluate(&context(&path, pose, goal));
            pose.position.x += update.velocity.x * DT;
            pose.position.y += update.velocity.y * DT;
            pose.heading = update.heading;
            if pose.position.range_to(&goal) < cell {
                arrived = true;
                break;
            }
        }
        assert!(
            arrived,
            "Agent should reach the goal cell, ended at {:?}",
            pose.position
        );
    }

    /// Over a fixed duration T at rate R, the number of shots is
    /// floor(T*R) within one shot of accumulator phase.
    #[test]
    fn test_fire_rate_accuracy() {
        let rate = 2.0;
        let duration_secs = 10.0;
        let ticks = (duration_secs / DT).round() as u32;

        let mut cooldown = 0.0;
        let mut shots = 0;
        for _ in 0..ticks {
            shots += fire_cycle(&mut cooldown, rate, DT, true);
        }

        let expected = (duration_secs * rate).floor() as i64;
        assert!(
            (shots as i64 - expected).abs() <= 1,
            "Expected {expected} +/- 1 shots over {duration_secs}s, got {shots}"
        );
    }

    #[test]
    fn test_fire_cycle_preserves_fractional_overflow() {
        // Period 0.5s, ticks of 0.3s: shots land at 0.6, 1.2, 1.5, ...
        let mut cooldown = 0.0;
        let mut total = 0;
        for _ in 0..5 {
            total += fire_cycle(&mut cooldown, 2.0, 0.3, true);
        }
        // 1.5s elapsed at 2 shots/s = 3 shots, phase carried between them.
        assert_eq!(total, 3);
        assert!(cooldown < 0.5, "Accumulator keeps only the overflow");
    }

    #[test]
    fn test_released_trigger_saturates_at_one_shot() {
        let mut cooldown = 0.0;
        // A long idle stretch never queues more than one period.
        for _ in 0..600 {
            let shots = fire_cycle(&mut cooldown, 2.0, DT, false);
            assert_eq!(shots, 0);
        }
        // Re-engaging fires exactly one immediate shot, not a burst.
        let shots = fire_cycle(&mut cooldown, 2.0, DT, true);
        assert_eq!(shots, 1, "Idle accumulation must not burst-fire");
    }

    #[test]
    fn test_zero_fire_rate_never_fires() {
        let mut cooldown = 0.0;
        assert_eq!(fire_cycle(&mut cooldown, 0.0, 100.0, true), 0);
    }

    #[test]
    fn test_profiles_differ_by_archetype() {
        let player = get_profile(TankArchetype::Player);
        let hunter = get_profile(TankArchetype::Hunter);
        assert!(player.movement_speed > hunter.movement_speed);
        assert!(player.fire_rate > hunter.fire_rate);
        assert_eq!(player.max_health, hunter.max_health);
        assert!(hunter.rotation_speed > PI / 2.0);
    }
}
