use crate::{Ball, BallNumber, Events, SoundEvent};
use glam::Vec2;
use hecs::{Entity, World};

/// Centres closer than this are treated as coincident and have no usable normal
const MIN_CONTACT_DISTANCE: f32 = 1e-6;

/// Resolve ball-ball contacts for every unordered pair still on the table.
/// Balls listed in `skip` (respawned this frame) sit the frame out.
pub fn resolve_collisions(world: &mut World, skip: &[Entity], events: &mut Events) {
    // Collect ball data without holding borrows (deterministic: sort by ball number)
    let mut balls: Vec<(Entity, BallNumber, Ball)> = world
        .query::<(&Ball, &BallNumber)>()
        .iter()
        .filter(|(e, _)| !skip.contains(e))
        .map(|(e, (ball, number))| (e, *number, *ball))
        .collect();
    balls.sort_by_key(|(_, number, _)| *number);

    let mut touched = false;
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (head, tail) = balls.split_at_mut(j);
            let (_, first, a) = &mut head[i];
            let (_, second, b) = &mut tail[0];

            if !overlapping(a, b) {
                continue;
            }
            events.emit(SoundEvent::Collision);
            touched = true;

            match contact_impulse(a, b) {
                Some(impulse) => {
                    a.vel -= impulse;
                    b.vel += impulse;
                }
                None => log::trace!(
                    "balls {} and {} share a centre, skipping",
                    first.0,
                    second.0
                ),
            }
        }
    }

    if !touched {
        return;
    }

    // Write velocities back
    for (entity, _number, resolved) in balls {
        if let Ok(mut ball) = world.get::<&mut Ball>(entity) {
            ball.vel = resolved.vel;
        }
    }
}

pub fn overlapping(a: &Ball, b: &Ball) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Velocity exchanged along the line of centres, taken from `a` and given to `b`.
///
/// All balls weigh the same, so the elastic impulse `2 / (m_a + m_b)` factor
/// cancels and the exchange is the relative velocity projected on the normal.
/// Returns `None` when the centres coincide.
pub fn contact_impulse(a: &Ball, b: &Ball) -> Option<Vec2> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    if distance < MIN_CONTACT_DISTANCE {
        return None;
    }

    let normal = delta / distance;
    let p = (a.vel - b.vel).dot(normal);
    Some(normal * p)
}
