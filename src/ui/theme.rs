//! Theme constants for the Ataxx GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const CELL_BG: Color32 = Color32::from_rgb(216, 222, 233);
pub const CELL_BORDER: Color32 = Color32::from_rgb(76, 86, 106);
pub const BLOCK_FILL: Color32 = Color32::from_rgb(59, 66, 82);
pub const BLOCK_HATCH: Color32 = Color32::from_rgb(94, 104, 124);
pub const LABEL: Color32 = Color32::from_rgb(180, 188, 204);

// Piece colors
pub const RED_PIECE: Color32 = Color32::from_rgb(200, 55, 60);
pub const RED_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(240, 120, 120);
pub const BLUE_PIECE: Color32 = Color32::from_rgb(45, 95, 200);
pub const BLUE_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(120, 160, 240);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(250, 210, 60);
pub const LAST_MOVE_RING: Color32 = Color32::from_rgb(80, 220, 120);
pub const EXTEND_TARGET: Color32 = Color32::from_rgb(80, 200, 120);
pub const JUMP_TARGET: Color32 = Color32::from_rgb(240, 170, 60);
pub const CAPTURE_LABEL: Color32 = Color32::from_rgb(30, 30, 36);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Jump counter colors
pub const JUMPS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const JUMPS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const JUMPS_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const CELL_GAP: f32 = 3.0;
pub const RING_WIDTH: f32 = 3.0;
