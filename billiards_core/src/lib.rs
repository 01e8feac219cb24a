pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod shot;
pub mod simulation;
pub mod systems;
pub mod table;
pub mod view;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use shot::*;
pub use simulation::*;
pub use table::*;
pub use view::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic billiards simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    shot: &mut ShotState,
    events: &mut Events,
    input_queue: &mut InputQueue,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (aim, press, release strikes the cue ball)
    ingest_inputs(world, shot, input_queue, events);

    // 2. Move balls, bounce off cushions, apply friction
    integrate_balls(world, table, config, events);

    // 3. Pockets (object balls removed, cue ball respawned)
    let respawned = check_pockets(world, table, events);

    // 4. Ball-ball collisions among balls still in play
    resolve_collisions(world, &respawned, events);

    // 5. Follow the cue ball with the aim and build charge
    update_aim(world, shot);
    charge_shot(shot, config);

    time.advance();
}

/// Helper to create a ball entity
pub fn create_ball(
    world: &mut World,
    number: u8,
    role: BallRole,
    color: BallColor,
    ball: Ball,
) -> hecs::Entity {
    world.spawn((ball, BallNumber(number), role, color))
}

/// Helper to rack the opening layout: the cue ball on its spot and a row of
/// object balls with random colours
pub fn rack_table(world: &mut World, config: &Config, table: &Table, rng: &mut GameRng) {
    create_ball(
        world,
        0,
        BallRole::Cue,
        BallColor::White,
        Ball::at_rest(table.cue_spawn(), config.ball_radius),
    );

    for (i, pos) in Table::rack_positions(config).into_iter().enumerate() {
        let color = BallColor::random(rng);
        create_ball(
            world,
            i as u8 + 1,
            BallRole::Object,
            color,
            Ball::at_rest(pos, config.ball_radius),
        );
    }

    log::info!("table racked with {} balls", world.len());
}
