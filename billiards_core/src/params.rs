/// Table tuning parameters for billiards
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 400.0;

    // Pockets
    pub const POCKET_RADIUS: f32 = 12.0; // capture radius around each pocket centre
    pub const POCKET_INSET: f32 = 20.0; // distance of pocket centres from the cushions

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const FRICTION: f32 = 0.99; // velocity retained per frame
    pub const MIN_VELOCITY: f32 = 0.1; // below this a component snaps to zero
    pub const WALL_RESTITUTION: f32 = 0.9;

    // Layout
    pub const CUE_START_X: f32 = 400.0;
    pub const CUE_START_Y: f32 = 200.0;
    pub const RACK_ORIGIN_X: f32 = 200.0;
    pub const RACK_ORIGIN_Y: f32 = 200.0;
    pub const RACK_SPACING: f32 = 30.0;
    pub const OBJECT_BALLS: u8 = 5;

    // Shot
    pub const CHARGE_RATE: f32 = 0.5; // power gained per frame while charging
    pub const MAX_POWER: f32 = 30.0;

    // Cue stick and aim guide (renderer geometry)
    pub const STICK_LENGTH: f32 = 100.0;
    pub const STICK_WIDTH: f32 = 10.0;
    pub const AIM_GUIDE_LENGTH: f32 = 100.0;
    pub const AIM_GUIDE_DOTS: u8 = 10;
}
