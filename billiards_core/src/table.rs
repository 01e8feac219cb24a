use glam::Vec2;

use crate::Config;

/// Number of pockets on the table
pub const POCKET_COUNT: usize = 6;

/// Fixed table geometry: cushions and pockets
#[derive(Debug, Clone)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub pockets: [Vec2; POCKET_COUNT],
    pub pocket_radius: f32,
    cue_spawn: Vec2,
}

impl Table {
    pub fn new(config: &Config) -> Self {
        let w = config.table_width;
        let h = config.table_height;
        let inset = config.pocket_inset;

        // Four corners plus the middle of both long sides
        let pockets = [
            Vec2::new(inset, inset),
            Vec2::new(w / 2.0, inset),
            Vec2::new(w - inset, inset),
            Vec2::new(inset, h - inset),
            Vec2::new(w / 2.0, h - inset),
            Vec2::new(w - inset, h - inset),
        ];

        Self {
            width: w,
            height: h,
            pockets,
            pocket_radius: config.pocket_radius,
            cue_spawn: config.cue_start,
        }
    }

    /// Spot where the cue ball starts and respawns
    pub fn cue_spawn(&self) -> Vec2 {
        self.cue_spawn
    }

    /// Index of the first pocket that swallows a ball at `pos`
    pub fn pocket_capturing(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let reach = self.pocket_radius + radius;
        self.pockets
            .iter()
            .position(|pocket| pos.distance(*pocket) < reach)
    }

    /// Starting positions of the object balls, in rack order
    pub fn rack_positions(config: &Config) -> Vec<Vec2> {
        (0..config.object_balls).map(|i| config.rack_slot(i)).collect()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pocket_layout() {
        let table = Table::default();
        assert_eq!(table.pockets[0], Vec2::new(20.0, 20.0), "Top-left corner");
        assert_eq!(table.pockets[1], Vec2::new(400.0, 20.0), "Top middle");
        assert_eq!(table.pockets[2], Vec2::new(780.0, 20.0), "Top-right corner");
        assert_eq!(table.pockets[4], Vec2::new(400.0, 380.0), "Bottom middle");
        assert_eq!(table.pockets[5], Vec2::new(780.0, 380.0), "Bottom-right corner");
    }

    #[test]
    fn test_capture_uses_pocket_plus_ball_radius() {
        let table = Table::default();
        // 12 + 10 = 22 reach
        assert_eq!(table.pocket_capturing(Vec2::new(41.9, 20.0), 10.0), Some(0));
        assert_eq!(
            table.pocket_capturing(Vec2::new(42.0, 20.0), 10.0),
            None,
            "Exactly at the reach distance is not captured"
        );
    }

    #[test]
    fn test_middle_of_table_is_safe() {
        let table = Table::default();
        assert_eq!(table.pocket_capturing(table.cue_spawn(), 10.0), None);
    }

    #[test]
    fn test_side_pocket_capture() {
        let table = Table::default();
        assert_eq!(table.pocket_capturing(Vec2::new(410.0, 375.0), 10.0), Some(4));
    }

    #[test]
    fn test_rack_positions() {
        let config = Config::default();
        let rack = Table::rack_positions(&config);
        assert_eq!(rack.len(), 5);
        assert_eq!(rack[0], Vec2::new(200.0, 200.0));
        assert_eq!(rack[1], Vec2::new(230.0, 200.0));
    }
}
