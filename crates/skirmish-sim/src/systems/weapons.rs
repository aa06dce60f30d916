//! Weapon system — fire cadence and projectile spawning for both tanks.
//!
//! The player fires while the trigger input is held; the hunter fires
//! while pursuit is active. Both share the same cadence accumulator.

use hecs::World;

use skirmish_core::components::{HunterTank, PlayerTank, Pose, ProjectileSpec, Turret, Weapon};
use skirmish_core::constants::DT;
use skirmish_core::enums::TankArchetype;
use skirmish_core::events::GameEvent;
use skirmish_core::input::InputState;
use skirmish_core::types::Position;

use skirmish_pursuit::steering::fire_cycle;

use crate::world_setup;

struct FireOrder {
    position: Position,
    turret_angle: f64,
    spec: ProjectileSpec,
    by: TankArchetype,
}

/// Run the weapon system: advance cadence, spawn due projectiles.
pub fn run(
    world: &mut World,
    input: &InputState,
    pursuit_active: bool,
    events: &mut Vec<GameEvent>,
) {
    // Collect fire orders first; spawning mid-query would alias the world.
    let mut orders: Vec<FireOrder> = Vec::new();

    for (_entity, (_player, pose, turret, weapon)) in
        world.query_mut::<(&PlayerTank, &Pose, &Turret, &mut Weapon)>()
    {
        let shots = fire_cycle(&mut weapon.cooldown, weapon.fire_rate, DT, input.fire);
        for _ in 0..shots {
            orders.push(FireOrder {
                position: pose.position,
                turret_angle: turret.angle,
                spec: weapon.projectile.clone(),
                by: TankArchetype::Player,
            });
        }
    }

    for (_entity, (_hunter, pose, turret, weapon)) in
        world.query_mut::<(&HunterTank, &Pose, &Turret, &mut Weapon)>()
    {
        let shots = fire_cycle(&mut weapon.cooldown, weapon.fire_rate, DT, pursuit_active);
        for _ in 0..shots {
            orders.push(FireOrder {
                position: pose.position,
                turret_angle: turret.angle,
                spec: weapon.projectile.clone(),
                by: TankArchetype::Hunter,
            });
        }
    }

    for order in orders {
        world_setup::spawn_projectile(
            world,
            order.position,
            order.turret_angle,
            &order.spec,
            order.by,
        );
        events.push(GameEvent::ShotFired { by: order.by });
    }
}
