use glam::Vec2;
use hecs::World;

use crate::systems::table_at_rest;
use crate::view::{snapshot, Snapshot};
use crate::{
    rack_table, step, Config, ConfigError, Events, GameRng, InputQueue, ShotInput, ShotState,
    Table, Time,
};

/// All state of one table, stepped once per frame by the host
pub struct Simulation {
    pub world: World,
    pub time: Time,
    pub table: Table,
    pub config: Config,
    pub shot: ShotState,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let table = Table::new(&config);
        Self::build(config, table, seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = Table::new(&config);
        Ok(Self::build(config, table, seed))
    }

    fn build(config: Config, table: Table, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        rack_table(&mut world, &config, &table, &mut rng);

        Self {
            world,
            time: Time::new(),
            table,
            config,
            shot: ShotState::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
        }
    }

    pub fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.table,
            &self.config,
            &mut self.shot,
            &mut self.events,
            &mut self.input_queue,
        );
    }

    pub fn aim_at(&mut self, target: Vec2) {
        self.input_queue.aim_at(target);
    }

    pub fn press(&mut self) {
        self.input_queue.push(ShotInput::Press);
    }

    pub fn release(&mut self) {
        self.input_queue.push(ShotInput::Release);
    }

    /// True when every ball on the table has stopped
    pub fn at_rest(&self) -> bool {
        table_at_rest(&self.world)
    }

    /// Balls still on the table, cue ball included
    pub fn ball_count(&self) -> usize {
        self.world.len() as usize
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.world, &self.table, &self.config, &self.shot, &self.time)
    }

    /// Re-rack the opening layout and clear all per-shot state
    pub fn reset(&mut self) {
        self.world.clear();
        rack_table(&mut self.world, &self.config, &self.table, &mut self.rng);
        self.time = Time::new();
        self.shot.reset();
        self.events.clear();
        self.input_queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_racked_and_still() {
        let sim = Simulation::new(1);
        assert_eq!(sim.ball_count(), 6);
        assert!(sim.at_rest());
        assert_eq!(sim.time.frame, 0);
    }

    #[test]
    fn test_with_config_rejects_invalid_table() {
        let config = Config {
            wall_restitution: 2.0,
            ..Config::default()
        };
        assert!(Simulation::with_config(config, 1).is_err());
    }

    #[test]
    fn test_with_config_uses_rack_size() {
        let config = Config {
            object_balls: 3,
            ..Config::default()
        };
        let sim = Simulation::with_config(config, 1).unwrap();
        assert_eq!(sim.ball_count(), 4);
    }

    #[test]
    fn test_reset_restores_opening_layout() {
        let mut sim = Simulation::new(9);
        sim.aim_at(Vec2::new(0.0, 200.0));
        sim.press();
        for _ in 0..40 {
            sim.step();
        }
        sim.release();
        sim.step();
        assert!(!sim.at_rest());

        sim.reset();

        assert_eq!(sim.ball_count(), 6);
        assert!(sim.at_rest());
        assert_eq!(sim.time.frame, 0);
        assert!(!sim.shot.is_charging());
        assert!(sim.input_queue.inputs.is_empty());
    }
}
