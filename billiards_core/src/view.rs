//! Read-only views of the table for the renderer.

use glam::Vec2;
use hecs::World;

use crate::systems::{cue_position, table_at_rest};
use crate::table::POCKET_COUNT;
use crate::{Ball, BallColor, BallNumber, BallRole, Config, ShotState, Table, Time};

/// One ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub number: u8,
    pub role: BallRole,
    pub color: BallColor,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Table outline and pockets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableView {
    pub width: f32,
    pub height: f32,
    pub pockets: [Vec2; POCKET_COUNT],
    pub pocket_radius: f32,
}

impl From<&Table> for TableView {
    fn from(table: &Table) -> Self {
        Self {
            width: table.width,
            height: table.height,
            pockets: table.pockets,
            pocket_radius: table.pocket_radius,
        }
    }
}

/// Cue stick and aim guide state
#[derive(Debug, Clone, PartialEq)]
pub struct CueView {
    pub origin: Vec2, // cue ball centre
    pub angle: f32,
    pub power: f32,
    pub charging: bool,
    pub show_stick: bool,
    pub show_guide: bool,
    /// Stick extent along the aim axis relative to `origin`; pulls back as power grows
    pub stick_span: (f32, f32),
    pub stick_width: f32,
    pub guide: Vec<Vec2>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub frame: u64,
    pub table: TableView,
    pub balls: Vec<BallView>,
    pub cue: Option<CueView>,
    pub at_rest: bool,
}

/// Dots along the aim line, starting at the cue ball centre
pub fn aim_guide_points(origin: Vec2, angle: f32, length: f32, dots: u8) -> Vec<Vec2> {
    if dots == 0 {
        return Vec::new();
    }
    let dir = Vec2::new(angle.cos(), angle.sin());
    let spacing = length / dots as f32;
    (0..dots)
        .map(|i| origin + dir * (spacing * i as f32))
        .collect()
}

/// Stick extent along the aim axis, drawn back by `power`
pub fn stick_span(length: f32, power: f32) -> (f32, f32) {
    let half = length / 2.0;
    (-(half + power), half)
}

pub fn ball_views(world: &World) -> Vec<BallView> {
    let mut balls: Vec<BallView> = world
        .query::<(&Ball, &BallNumber, &BallRole, &BallColor)>()
        .iter()
        .map(|(_e, (ball, number, role, color))| BallView {
            number: number.0,
            role: *role,
            color: *color,
            pos: ball.pos,
            vel: ball.vel,
            radius: ball.radius,
        })
        .collect();
    balls.sort_by_key(|b| b.number);
    balls
}

pub fn cue_view(world: &World, config: &Config, shot: &ShotState) -> Option<CueView> {
    let origin = cue_position(world)?;
    let at_rest = table_at_rest(world);
    let charging = shot.is_charging();
    let show_guide = at_rest && !charging;

    let guide = if show_guide {
        aim_guide_points(
            origin,
            shot.aim_angle,
            config.aim_guide_length,
            config.aim_guide_dots,
        )
    } else {
        Vec::new()
    };

    // Idle stick sits at zero power
    let power = if charging { shot.power } else { 0.0 };

    Some(CueView {
        origin,
        angle: shot.aim_angle,
        power,
        charging,
        show_stick: charging || at_rest,
        show_guide,
        stick_span: stick_span(config.stick_length, power),
        stick_width: config.stick_width,
        guide,
    })
}

pub fn snapshot(
    world: &World,
    table: &Table,
    config: &Config,
    shot: &ShotState,
    time: &Time,
) -> Snapshot {
    Snapshot {
        frame: time.frame,
        table: TableView::from(table),
        balls: ball_views(world),
        cue: cue_view(world, config, shot),
        at_rest: table_at_rest(world),
    }
}
