use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::shot::{ShotAction, ShotState};
use crate::Config;

/// Position of the cue ball, if it is on the table
pub fn cue_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Ball, &BallRole)>()
        .iter()
        .find(|(_e, (_ball, role))| **role == BallRole::Cue)
        .map(|(_e, (ball, _role))| ball.pos)
}

/// Apply queued pointer inputs to the shot state. A release that ends a charge
/// strikes the cue ball.
pub fn ingest_inputs(
    world: &mut World,
    shot: &mut ShotState,
    input_queue: &mut InputQueue,
    events: &mut Events,
) {
    for input in input_queue.pop_inputs() {
        match input {
            ShotInput::AimAt { x, y } => {
                let target = Vec2::new(x, y);
                match cue_position(world) {
                    Some(cue_pos) => shot.aim_at(cue_pos, target),
                    None => shot.target = Some(target),
                }
            }
            ShotInput::Press => {
                shot.transition(ShotAction::Press);
            }
            ShotInput::Release => {
                if let Some(vel) = shot.release() {
                    strike_cue_ball(world, vel, events);
                }
            }
        }
    }
}

/// Set the cue ball moving. The previous velocity is replaced, not added to.
pub fn strike_cue_ball(world: &mut World, vel: Vec2, events: &mut Events) {
    let mut struck = false;
    for (_entity, (ball, role)) in world.query_mut::<(&mut Ball, &BallRole)>() {
        if *role == BallRole::Cue {
            ball.vel = vel;
            struck = true;
            break;
        }
    }

    if struck {
        events.emit(SoundEvent::Hit);
        log::debug!("shot fired: velocity ({:.2}, {:.2})", vel.x, vel.y);
    } else {
        log::warn!("shot released with no cue ball on the table");
    }
}

/// Re-point the cue at the pointer from wherever the cue ball is now
pub fn update_aim(world: &World, shot: &mut ShotState) {
    if let Some(cue_pos) = cue_position(world) {
        shot.aim_from(cue_pos);
    }
}

/// One frame of charging
pub fn charge_shot(shot: &mut ShotState, config: &Config) {
    shot.charge(config.charge_rate, config.max_power);
}
