//! Pointer input handling

use glam::Vec2;

/// Canvas element placement on the page, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert a client-space pointer position into table coordinates.
/// A canvas stretched by CSS is scaled back to the table's own size.
pub fn pointer_to_table(client: Vec2, rect: CanvasRect, table_size: Vec2) -> Vec2 {
    let local = client - Vec2::new(rect.left, rect.top);
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return local;
    }
    local * (table_size / Vec2::new(rect.width, rect.height))
}
