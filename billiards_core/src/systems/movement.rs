use crate::{Ball, Config, Events, SoundEvent, Table};
use hecs::World;

/// Advance every ball by one frame: move, bounce off cushions, apply felt
/// friction and snap slow components to rest.
pub fn integrate_balls(world: &mut World, table: &Table, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;

        for _ in 0..reflect_walls(ball, table, config.wall_restitution) {
            events.emit(SoundEvent::Wall);
        }

        apply_friction(ball, config.friction);
        snap_to_rest(ball, config.min_velocity);
    }
}

/// Reverse and damp the velocity on each axis whose cushion the ball overlaps.
/// Position is left where it is. Returns the number of axes that bounced.
pub fn reflect_walls(ball: &mut Ball, table: &Table, restitution: f32) -> u8 {
    let mut bounces = 0;

    if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > table.width {
        ball.vel.x *= -restitution;
        bounces += 1;
    }
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > table.height {
        ball.vel.y *= -restitution;
        bounces += 1;
    }

    bounces
}

pub fn apply_friction(ball: &mut Ball, friction: f32) {
    ball.vel *= friction;
}

/// Zero any velocity component slower than `threshold`
pub fn snap_to_rest(ball: &mut Ball, threshold: f32) {
    if ball.vel.x.abs() < threshold {
        ball.vel.x = 0.0;
    }
    if ball.vel.y.abs() < threshold {
        ball.vel.y = 0.0;
    }
}

/// True when no ball on the table is moving
pub fn table_at_rest(world: &World) -> bool {
    world
        .query::<&Ball>()
        .iter()
        .all(|(_e, ball)| !ball.is_moving())
}
