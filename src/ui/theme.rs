//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::board::MAX_BOARD_SIZE;
use crate::Pos;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Translucent preview of the stone about to be placed
pub fn hover_preview(is_black: bool) -> Color32 {
    if is_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 80)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 80)
    }
}

/// Column label: plain `A`-`Z` in order, `I` included. One letter per
/// column is why boards stop at [`MAX_BOARD_SIZE`].
pub fn column_label(col: usize) -> char {
    debug_assert!(col < MAX_BOARD_SIZE);
    (b'A' + col as u8) as char
}

/// Star point positions (0-indexed) for a board of the given size.
///
/// Corner points sit on the fourth line (third on small boards); boards of
/// 13 and up also get the side points. 15x15 yields 3/7/11 on both axes.
pub fn star_points(size: usize) -> Vec<Pos> {
    let center = size / 2;
    if size < 9 {
        return vec![Pos::new(center as u8, center as u8)];
    }

    let edge = if size >= 13 { 3 } else { 2 };
    let mut lines = vec![edge, size - 1 - edge];
    if size >= 13 && size % 2 == 1 {
        lines.insert(1, center);
    }

    let mut points: Vec<Pos> = lines
        .iter()
        .flat_map(|&r| lines.iter().map(move |&c| Pos::new(r as u8, c as u8)))
        .collect();
    if size % 2 == 1 && !points.contains(&Pos::new(center as u8, center as u8)) {
        points.push(Pos::new(center as u8, center as u8));
    }
    points
}
