//! Steering controller: path following, turret tracking, fire cadence.

use std::f64::consts::TAU;

use glam::DVec2;

use skirmish_core::components::Pose;
use skirmish_core::types::{Position, Velocity};

/// Input to the steering controller for one tick.
pub struct PursuitContext<'a> {
    /// Planned waypoints, current cell center first. Fewer than 2
    /// waypoints means there is nowhere to go this tick.
    pub path: &'a [Position],
    pub pose: Pose,
    /// Current sprite-frame turret angle.
    pub turret_angle: f64,
    /// Translation speed (world units per second).
    pub movement_speed: f64,
    /// Chassis position of the target agent.
    pub target_position: Position,
}

/// Output from the steering controller.
pub struct PursuitUpdate {
    /// Desired velocity; the kinematic step integrates it over the tick.
    pub velocity: Velocity,
    /// New chassis heading, wrapped to [0, TAU). Applied as a direct snap.
    pub heading: f64,
    /// New sprite-frame turret angle.
    pub turret_angle: f64,
}

/// Evaluate steering for one tick.
///
/// The second waypoint (index 1) is the immediate movement target — the
/// first is the agent's own cell center. The heading snaps straight to the
/// travel direction with no turn-rate smoothing. The turret tracks the
/// target's chassis every tick regardless of path state, holding its last
/// angle when the aim vector has zero length.
pub fn evaluate(ctx: &PursuitContext) -> PursuitUpdate {
    let turret_angle = ctx
        .pose
        .position
        .turret_aim_to(&ctx.target_position)
        .unwrap_or(ctx.turret_angle);

    let hold = PursuitUpdate {
        velocity: Velocity::default(),
        heading: ctx.pose.heading,
        turret_angle,
    };

    if ctx.path.len() < 2 {
        return hold;
    }

    let next = ctx.path[1];
    let to_next = DVec2::new(next.x - ctx.pose.position.x, next.y - ctx.pose.position.y);
    if to_next.length_squared() < 1e-12 {
        return hold;
    }

    let dir = to_next / to_next.length();
    PursuitUpdate {
        velocity: Velocity::new(dir.x * ctx.movement_speed, dir.y * ctx.movement_speed),
        heading: dir.y.atan2(dir.x).rem_euclid(TAU),
        turret_angle,
    }
}

/// Advance a weapon's cadence accumulator by one tick and report how many
/// shots are due.
///
/// While the trigger is held, each time the accumulator exceeds the firing
/// period one shot is due and the accumulator is decremented by the period
/// — not reset — so fractional overflow carries into the next cycle and
/// the long-run rate stays accurate. With the trigger released the
/// accumulator keeps filling but saturates at one period: re-engaging
/// fires at most one immediate shot.
pub fn fire_cycle(cooldown: &mut f64, fire_rate: f64, dt: f64, trigger: bool) -> u32 {
    if fire_rate <= 0.0 {
        return 0;
    }
    let period = 1.0 / fire_rate;
    *cooldown += dt;

    if !trigger {
        if *cooldown > period {
            *cooldown = period;
        }
        return 0;
    }

    let mut shots = 0;
    while *cooldown > period {
        *cooldown -= period;
        shots += 1;
    }
    shots
}
