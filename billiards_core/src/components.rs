use glam::Vec2;

/// Ball component - position, velocity and size of one ball on the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per frame
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn at_rest(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, Vec2::ZERO, radius)
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Put the ball back on `spot` with no velocity
    pub fn respawn(&mut self, spot: Vec2) {
        self.pos = spot;
        self.vel = Vec2::ZERO;
    }
}

/// What happens to a ball when it drops into a pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallRole {
    Cue,    // respawned on its starting spot
    Object, // removed from the table
}

/// Rack number: 0 = cue ball, 1.. = object balls. Systems iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallNumber(pub u8);

/// Display colour handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallColor {
    White,
    Hue(f32), // degrees, full saturation at 50% lightness
}

impl BallColor {
    /// Pick a random hue for an object ball
    pub fn random(rng: &mut crate::GameRng) -> Self {
        use rand::Rng;
        BallColor::Hue(rng.0.gen_range(0.0..360.0))
    }

    pub fn hue(&self) -> Option<f32> {
        match self {
            BallColor::White => None,
            BallColor::Hue(h) => Some(*h),
        }
    }
}
