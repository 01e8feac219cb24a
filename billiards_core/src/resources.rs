use glam::Vec2;

use crate::components::BallRole;

/// Simulation clock. One step is one frame; there is no wall-clock delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub frame: u64, // Frames simulated so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Sound cues for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Wall,      // ball bounced off a cushion
    Collision, // two balls touching
    Hit,       // cue struck the cue ball
    Hole,      // ball dropped into a pocket
}

impl SoundEvent {
    pub fn name(self) -> &'static str {
        match self {
            SoundEvent::Wall => "wall",
            SoundEvent::Collision => "collision",
            SoundEvent::Hit => "hit",
            SoundEvent::Hole => "hole",
        }
    }

    /// Numeric id used across the JS boundary
    pub fn code(self) -> u8 {
        match self {
            SoundEvent::Wall => 0,
            SoundEvent::Collision => 1,
            SoundEvent::Hit => 2,
            SoundEvent::Hole => 3,
        }
    }
}

/// A ball that dropped into a pocket this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocketed {
    pub number: u8,
    pub role: BallRole,
    pub pocket: usize,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub sounds: Vec<SoundEvent>,
    pub pocketed: Vec<Pocketed>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.pocketed.clear();
    }

    pub fn emit(&mut self, sound: SoundEvent) {
        self.sounds.push(sound);
    }

    pub fn count(&self, sound: SoundEvent) -> usize {
        self.sounds.iter().filter(|s| **s == sound).count()
    }
}

/// Input signals from the pointer layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotInput {
    AimAt { x: f32, y: f32 }, // pointer position in table coordinates
    Press,
    Release,
}

/// Input queue, filled by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<ShotInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push(&mut self, input: ShotInput) {
        self.inputs.push(input);
    }

    pub fn aim_at(&mut self, target: Vec2) {
        self.push(ShotInput::AimAt {
            x: target.x,
            y: target.y,
        });
    }

    pub fn pop_inputs(&mut self) -> Vec<ShotInput> {
        std::mem::take(&mut self.inputs)
    }
}
