use crate::{Ball, BallNumber, BallRole, Events, Pocketed, SoundEvent, Table};
use hecs::{Entity, World};

/// Drop balls that reached a pocket. Object balls leave the table, the cue ball
/// goes back to its spot. Returns the respawned cue ball, if any.
pub fn check_pockets(world: &mut World, table: &Table, events: &mut Events) -> Vec<Entity> {
    // Mark first, then apply, so removal never disturbs the scan
    let mut captured: Vec<(Entity, BallNumber, BallRole, usize)> = world
        .query::<(&Ball, &BallNumber, &BallRole)>()
        .iter()
        .filter_map(|(e, (ball, number, role))| {
            table
                .pocket_capturing(ball.pos, ball.radius)
                .map(|pocket| (e, *number, *role, pocket))
        })
        .collect();
    captured.sort_by_key(|(_, number, _, _)| *number);

    let mut respawned = Vec::new();
    for (entity, number, role, pocket) in captured {
        if !drop_in_pocket(world, table, entity, role) {
            continue;
        }
        match role {
            BallRole::Cue => {
                respawned.push(entity);
                log::debug!("cue ball scratched in pocket {pocket}, respawning");
            }
            BallRole::Object => log::debug!("ball {} pocketed in pocket {pocket}", number.0),
        }

        events.emit(SoundEvent::Hole);
        events.pocketed.push(Pocketed {
            number: number.0,
            role,
            pocket,
        });
    }

    respawned
}

/// Apply the capture policy for `role`. False if the entity is no longer in the world.
fn drop_in_pocket(world: &mut World, table: &Table, entity: Entity, role: BallRole) -> bool {
    match role {
        BallRole::Cue => match world.get::<&mut Ball>(entity) {
            Ok(mut ball) => {
                ball.respawn(table.cue_spawn());
                true
            }
            Err(_) => false,
        },
        BallRole::Object => world.despawn(entity).is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, BallColor, Config};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Table, Events) {
        let world = hecs::World::new();
        let table = Table::new(&Config::new());
        let events = Events::new();
        (world, table, events)
    }

    fn spawn(world: &mut hecs::World, number: u8, role: BallRole, pos: Vec2) -> Entity {
        let color = match role {
            BallRole::Cue => BallColor::White,
            BallRole::Object => BallColor::Hue(200.0),
        };
        create_ball(world, number, role, color, Ball::new(pos, Vec2::new(-1.0, -1.0), 10.0))
    }

    #[test]
    fn test_object_ball_in_pocket_is_removed_once() {
        let (mut world, table, mut events) = setup_world();
        spawn(&mut world, 0, BallRole::Cue, Vec2::new(400.0, 200.0));
        let obj = spawn(&mut world, 1, BallRole::Object, Vec2::new(25.0, 25.0));
        spawn(&mut world, 2, BallRole::Object, Vec2::new(300.0, 200.0));

        let respawned = check_pockets(&mut world, &table, &mut events);

        assert!(respawned.is_empty());
        assert_eq!(world.len(), 2, "Exactly one ball removed");
        assert!(!world.contains(obj));
        assert_eq!(events.count(SoundEvent::Hole), 1);
        assert_eq!(
            events.pocketed,
            vec![Pocketed {
                number: 1,
                role: BallRole::Object,
                pocket: 0
            }]
        );
    }

    #[test]
    fn test_cue_ball_in_pocket_respawns() {
        let (mut world, table, mut events) = setup_world();
        let cue = spawn(&mut world, 0, BallRole::Cue, Vec2::new(775.0, 385.0));

        let respawned = check_pockets(&mut world, &table, &mut events);

        assert_eq!(respawned, vec![cue]);
        assert_eq!(world.len(), 1, "Cue ball is never removed");
        let ball = *world.get::<&Ball>(cue).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(events.count(SoundEvent::Hole), 1);
        assert_eq!(events.pocketed[0].pocket, 5);
    }

    #[test]
    fn test_several_balls_pocketed_in_one_frame() {
        let (mut world, table, mut events) = setup_world();
        spawn(&mut world, 1, BallRole::Object, Vec2::new(25.0, 25.0));
        spawn(&mut world, 2, BallRole::Object, Vec2::new(400.0, 30.0));
        spawn(&mut world, 3, BallRole::Object, Vec2::new(770.0, 30.0));
        spawn(&mut world, 4, BallRole::Object, Vec2::new(300.0, 200.0));

        check_pockets(&mut world, &table, &mut events);

        assert_eq!(world.len(), 1, "Adjacent captures are not skipped");
        assert_eq!(events.count(SoundEvent::Hole), 3);
        let numbers: Vec<u8> = events.pocketed.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_ball_away_from_pockets_stays() {
        let (mut world, table, mut events) = setup_world();
        spawn(&mut world, 1, BallRole::Object, Vec2::new(300.0, 200.0));

        check_pockets(&mut world, &table, &mut events);

        assert_eq!(world.len(), 1);
        assert!(events.sounds.is_empty());
    }

    #[test]
    fn test_stale_entity_is_not_pocketed_again() {
        let (mut world, table, _events) = setup_world();
        let obj = spawn(&mut world, 1, BallRole::Object, Vec2::new(25.0, 25.0));
        let cue = spawn(&mut world, 0, BallRole::Cue, Vec2::new(25.0, 25.0));
        world.despawn(obj).unwrap();
        world.despawn(cue).unwrap();

        assert!(!drop_in_pocket(&mut world, &table, obj, BallRole::Object));
        assert!(!drop_in_pocket(&mut world, &table, cue, BallRole::Cue));
    }
}
