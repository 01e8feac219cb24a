use std::fmt;

use glam::Vec2;
use serde::Deserialize;

use crate::params::Params;
use crate::table::Table;

/// Table configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub pocket_radius: f32,
    pub pocket_inset: f32,
    pub ball_radius: f32,
    pub friction: f32,
    pub min_velocity: f32,
    pub wall_restitution: f32,
    pub cue_start: Vec2,
    pub rack_origin: Vec2,
    pub rack_spacing: f32,
    pub object_balls: u8,
    pub charge_rate: f32,
    pub max_power: f32,
    pub stick_length: f32,
    pub stick_width: f32,
    pub aim_guide_length: f32,
    pub aim_guide_dots: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            pocket_radius: Params::POCKET_RADIUS,
            pocket_inset: Params::POCKET_INSET,
            ball_radius: Params::BALL_RADIUS,
            friction: Params::FRICTION,
            min_velocity: Params::MIN_VELOCITY,
            wall_restitution: Params::WALL_RESTITUTION,
            cue_start: Vec2::new(Params::CUE_START_X, Params::CUE_START_Y),
            rack_origin: Vec2::new(Params::RACK_ORIGIN_X, Params::RACK_ORIGIN_Y),
            rack_spacing: Params::RACK_SPACING,
            object_balls: Params::OBJECT_BALLS,
            charge_rate: Params::CHARGE_RATE,
            max_power: Params::MAX_POWER,
            stick_length: Params::STICK_LENGTH,
            stick_width: Params::STICK_WIDTH,
            aim_guide_length: Params::AIM_GUIDE_LENGTH,
            aim_guide_dots: Params::AIM_GUIDE_DOTS,
        }
    }
}

/// Reasons a configuration cannot describe a playable table
#[derive(Debug)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f32 },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    OutsideTable { field: &'static str, pos: Vec2 },
    InPocket { field: &'static str, pos: Vec2 },
    TableTooSmall { width: f32, height: f32 },
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be within [{min}, {max}], got {value}"),
            ConfigError::OutsideTable { field, pos } => {
                write!(f, "{field} ({}, {}) lies outside the table", pos.x, pos.y)
            }
            ConfigError::InPocket { field, pos } => {
                write!(f, "{field} ({}, {}) lies within a pocket", pos.x, pos.y)
            }
            ConfigError::TableTooSmall { width, height } => {
                write!(f, "table {width}x{height} cannot hold a ball")
            }
            ConfigError::Parse(err) => write!(f, "invalid config json: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("table_width", self.table_width)?;
        positive("table_height", self.table_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("pocket_radius", self.pocket_radius)?;
        positive("charge_rate", self.charge_rate)?;
        positive("stick_length", self.stick_length)?;
        positive("aim_guide_length", self.aim_guide_length)?;
        within("friction", self.friction, f32::MIN_POSITIVE, 1.0)?;
        within("wall_restitution", self.wall_restitution, 0.0, 1.0)?;
        within("min_velocity", self.min_velocity, 0.0, f32::MAX)?;
        within("max_power", self.max_power, 0.0, f32::MAX)?;

        let diameter = self.ball_radius * 2.0;
        if self.table_width <= diameter || self.table_height <= diameter {
            return Err(ConfigError::TableTooSmall {
                width: self.table_width,
                height: self.table_height,
            });
        }

        let half_side = self.table_width.min(self.table_height) / 2.0;
        within("pocket_inset", self.pocket_inset, 0.0, half_side)?;

        self.inside_table("cue_start", self.cue_start)?;
        for i in 0..self.object_balls {
            self.inside_table("rack_origin", self.rack_slot(i))?;
        }

        // A spot inside a pocket's reach is captured on the first frame
        let table = Table::new(self);
        self.clear_of_pockets(&table, "cue_start", self.cue_start)?;
        for i in 0..self.object_balls {
            self.clear_of_pockets(&table, "rack_origin", self.rack_slot(i))?;
        }
        Ok(())
    }

    /// Starting position of the object ball in rack slot `index`
    pub fn rack_slot(&self, index: u8) -> Vec2 {
        self.rack_origin + Vec2::new(self.rack_spacing * index as f32, 0.0)
    }

    fn clear_of_pockets(
        &self,
        table: &Table,
        field: &'static str,
        pos: Vec2,
    ) -> Result<(), ConfigError> {
        match table.pocket_capturing(pos, self.ball_radius) {
            Some(_) => Err(ConfigError::InPocket { field, pos }),
            None => Ok(()),
        }
    }

    fn inside_table(&self, field: &'static str, pos: Vec2) -> Result<(), ConfigError> {
        let r = self.ball_radius;
        let inside = pos.x - r >= 0.0
            && pos.x + r <= self.table_width
            && pos.y - r >= 0.0
            && pos.y + r <= self.table_height;
        if inside {
            Ok(())
        } else {
            Err(ConfigError::OutsideTable { field, pos })
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this comparison too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn within(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
