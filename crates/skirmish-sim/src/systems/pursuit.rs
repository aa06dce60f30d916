//! Pursuit system — plans and steers the hunter each tick.
//!
//! While the player is within the activation range, the path is recomputed
//! from scratch every tick (never cached) and handed to the steering
//! controller from skirmish-pursuit. Outside the range the hunter holds.

use hecs::World;

use skirmish_core::components::{HunterTank, Mobility, PlayerTank, Pose, Turret};
use skirmish_core::constants::PURSUIT_ACTIVATION_RANGE;
use skirmish_core::types::{Position, Velocity};

use skirmish_nav::{find_path, BarrierGrid};
use skirmish_pursuit::steering::{evaluate, PursuitContext};

/// Hunter AI state carried between ticks for the snapshot: whether pursuit
/// is active and the waypoints it is following. The path itself is
/// discarded and recomputed every tick.
#[derive(Debug, Default)]
pub struct PursuitState {
    pub active: bool,
    pub path: Vec<Position>,
}

/// Run the pursuit system: plan a fresh path and apply steering output.
pub fn run(world: &mut World, barrier: &BarrierGrid, state: &mut PursuitState) {
    let target = match player_position(world) {
        Some(position) => position,
        None => {
            state.active = false;
            state.path.clear();
            return;
        }
    };

    for (_entity, (_hunter, pose, vel, turret, mobility)) in
        world.query_mut::<(&HunterTank, &mut Pose, &mut Velocity, &mut Turret, &Mobility)>()
    {
        if pose.position.range_to(&target) > PURSUIT_ACTIVATION_RANGE {
            *vel = Velocity::default();
            state.active = false;
            state.path.clear();
            continue;
        }

        let path = find_path(pose.position, target, barrier, true);
        let update = evaluate(&PursuitContext {
            path: &path,
            pose: *pose,
            turret_angle: turret.angle,
            movement_speed: mobility.movement_speed,
            target_position: target,
        });

        *vel = update.velocity;
        pose.heading = update.heading;
        turret.angle = update.turret_angle;

        state.active = true;
        state.path = path;
    }
}

fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&PlayerTank, &Pose)>()
        .iter()
        .next()
        .map(|(_, (_, pose))| pose.position)
}
