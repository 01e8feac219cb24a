//! WebAssembly bridge for the billiards table
//!
//! The page calls `tick()` once per `requestAnimationFrame`, forwards pointer
//! events, plays the sound codes each tick returns and draws from the flat
//! buffers exposed here. All simulation state lives in one `Simulation`.

mod input;

pub use input::{pointer_to_table, CanvasRect};

use billiards_core::{Config, Simulation, Snapshot, SoundEvent};
use glam::Vec2;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Floats per ball in `balls()`: x, y, radius, hue (-1 for the cue ball)
pub const BALL_STRIDE: usize = 4;

const SOUNDS: [SoundEvent; 4] = [
    SoundEvent::Wall,
    SoundEvent::Collision,
    SoundEvent::Hit,
    SoundEvent::Hole,
];

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Name of the audio clip for a sound code returned by `tick()`
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn sound_name(code: u8) -> String {
    SOUNDS
        .iter()
        .find(|s| s.code() == code)
        .map(|s| s.name().to_string())
        .unwrap_or_default()
}

/// One billiards table driven from JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct BilliardsGame {
    sim: Simulation,
    rect: CanvasRect,
    view: Snapshot,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl BilliardsGame {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: u32) -> Self {
        Self::from_simulation(Simulation::new(seed as u64))
    }

    /// Build a table from a JSON config. Invalid configs are reported as text.
    pub fn from_config_json(json: &str, seed: u32) -> Result<BilliardsGame, String> {
        let config = Config::from_json(json).map_err(|e| e.to_string())?;
        let sim = Simulation::with_config(config, seed as u64).map_err(|e| e.to_string())?;
        Ok(Self::from_simulation(sim))
    }

    /// Where the canvas sits on the page; used to map pointer positions
    pub fn set_canvas_rect(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.rect = CanvasRect {
            left,
            top,
            width,
            height,
        };
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let table_size = Vec2::new(self.sim.table.width, self.sim.table.height);
        let target = pointer_to_table(Vec2::new(client_x, client_y), self.rect, table_size);
        self.sim.aim_at(target);
    }

    pub fn pointer_down(&mut self) {
        self.sim.press();
    }

    pub fn pointer_up(&mut self) {
        self.sim.release();
    }

    /// Advance one frame. Returns the sound codes raised during it.
    pub fn tick(&mut self) -> Vec<u8> {
        self.sim.step();
        self.view = self.sim.snapshot();
        self.sim.events.sounds.iter().map(|s| s.code()).collect()
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.view = self.sim.snapshot();
    }

    pub fn frame(&self) -> f64 {
        self.view.frame as f64
    }

    pub fn ball_count(&self) -> u32 {
        self.view.balls.len() as u32
    }

    /// Flat `[x, y, radius, hue]` per ball, cue ball first
    pub fn balls(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.view.balls.len() * BALL_STRIDE);
        for ball in &self.view.balls {
            out.extend_from_slice(&[
                ball.pos.x,
                ball.pos.y,
                ball.radius,
                ball.color.hue().unwrap_or(-1.0),
            ]);
        }
        out
    }

    /// Numbers of the balls pocketed during the last tick
    pub fn pocketed(&self) -> Vec<u8> {
        self.sim.events.pocketed.iter().map(|p| p.number).collect()
    }

    pub fn at_rest(&self) -> bool {
        self.view.at_rest
    }

    pub fn is_charging(&self) -> bool {
        self.sim.shot.is_charging()
    }

    pub fn aim_angle(&self) -> f32 {
        self.sim.shot.aim_angle
    }

    pub fn power(&self) -> f32 {
        self.sim.shot.power
    }

    pub fn show_stick(&self) -> bool {
        self.view.cue.as_ref().is_some_and(|c| c.show_stick)
    }

    pub fn show_guide(&self) -> bool {
        self.view.cue.as_ref().is_some_and(|c| c.show_guide)
    }

    /// Cue ball centre as `[x, y]`, empty if there is none
    pub fn cue_origin(&self) -> Vec<f32> {
        self.view
            .cue
            .as_ref()
            .map(|c| vec![c.origin.x, c.origin.y])
            .unwrap_or_default()
    }

    /// `[back, front, width]` of the cue stick along the aim axis
    pub fn stick(&self) -> Vec<f32> {
        self.view
            .cue
            .as_ref()
            .map(|c| vec![c.stick_span.0, c.stick_span.1, c.stick_width])
            .unwrap_or_default()
    }

    /// Flat `[x, y]` per aim guide dot
    pub fn guide_points(&self) -> Vec<f32> {
        self.view
            .cue
            .as_ref()
            .map(|c| c.guide.iter().flat_map(|p| [p.x, p.y]).collect())
            .unwrap_or_default()
    }

    pub fn table_width(&self) -> f32 {
        self.view.table.width
    }

    pub fn table_height(&self) -> f32 {
        self.view.table.height
    }

    pub fn pocket_radius(&self) -> f32 {
        self.view.table.pocket_radius
    }

    /// Flat `[x, y]` per pocket centre
    pub fn pockets(&self) -> Vec<f32> {
        self.view
            .table
            .pockets
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }
}

impl BilliardsGame {
    fn from_simulation(sim: Simulation) -> Self {
        let rect = CanvasRect {
            left: 0.0,
            top: 0.0,
            width: sim.table.width,
            height: sim.table.height,
        };
        let view = sim.snapshot();
        log::info!(
            "billiards: {}x{} table ready",
            sim.table.width,
            sim.table.height
        );
        Self { sim, rect, view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_exposes_rack() {
        let game = BilliardsGame::new(1);
        assert_eq!(game.ball_count(), 6);
        let balls = game.balls();
        assert_eq!(balls.len(), 6 * BALL_STRIDE);
        assert_eq!(&balls[..4], &[400.0, 200.0, 10.0, -1.0], "Cue ball first, no hue");
        assert!(game.at_rest());
        assert!(game.show_guide());
        assert_eq!(game.pockets().len(), 12);
    }

    #[test]
    fn test_pointer_shot_plays_hit() {
        let mut game = BilliardsGame::new(1);
        game.set_canvas_rect(100.0, 50.0, 800.0, 400.0);
        game.pointer_move(700.0, 250.0); // table (600, 200)
        game.pointer_down();
        for _ in 0..20 {
            game.tick();
        }
        assert!(game.is_charging());
        assert_eq!(game.power(), 10.0);
        assert_eq!(game.aim_angle(), 0.0);
        assert!(!game.show_guide(), "Guide hidden while charging");

        game.pointer_up();
        let sounds = game.tick();

        assert!(sounds.contains(&SoundEvent::Hit.code()));
        assert!(!game.at_rest());
        assert!(!game.show_stick());
        assert_eq!(game.cue_origin(), vec![410.0, 200.0]);
    }

    #[test]
    fn test_sound_names_for_audio_player() {
        assert_eq!(sound_name(0), "wall");
        assert_eq!(sound_name(1), "collision");
        assert_eq!(sound_name(2), "hit");
        assert_eq!(sound_name(3), "hole");
        assert_eq!(sound_name(9), "");
    }

    #[test]
    fn test_from_config_json_reports_errors() {
        let err = BilliardsGame::from_config_json(r#"{ "friction": 3.0 }"#, 1)
            .err()
            .expect("Friction above one is rejected");
        assert!(err.contains("friction"));

        let game = BilliardsGame::from_config_json(r#"{ "object_balls": 2 }"#, 1).unwrap();
        assert_eq!(game.ball_count(), 3);
    }

    #[test]
    fn test_reset_returns_to_frame_zero() {
        let mut game = BilliardsGame::new(4);
        game.tick();
        game.tick();
        assert_eq!(game.frame(), 2.0);
        game.reset();
        assert_eq!(game.frame(), 0.0);
        assert_eq!(game.ball_count(), 6);
    }
}
